//! Member functions of `std::vector`.

use crate::catalog::entry::{Entry, Standard};

pub(super) const VECTOR_ENTRIES: &[Entry] = &[
    Entry {
        name: "operator[]",
        container: Some("vector"),
        header: "<vector>",
        category: "Element Access",
        time_complexity: "O(1)",
        space_complexity: "O(1)",
        arguments: "size_t pos",
        arg_explanation: "pos: index of element",
        return_type: "T&",
        description: "Access element at index (no bounds checking)",
        when_to_use: "Fast access; index guaranteed valid",
        when_not_to_use: "Need bounds checking (use at()); unknown index validity",
        real_world_freq: 10,
        competitive_freq: 10,
        example: "int val = v[5];",
        notes: Some("Most common access; undefined behavior if out of bounds"),
        since: Standard::Cpp98,
        related: "at, front, back",
    },
    Entry {
        name: "at",
        container: Some("vector"),
        header: "<vector>",
        category: "Element Access",
        time_complexity: "O(1)",
        space_complexity: "O(1)",
        arguments: "size_t pos",
        arg_explanation: "pos: index of element",
        return_type: "T&",
        description: "Access element with bounds checking (throws if invalid)",
        when_to_use: "Need safety; untrusted indices",
        when_not_to_use: "Performance critical; index guaranteed valid",
        real_world_freq: 6,
        competitive_freq: 4,
        example: "try { int val = v.at(5); } catch(std::out_of_range& e) {}",
        notes: Some("Throws out_of_range exception; safer than []"),
        since: Standard::Cpp98,
        related: "operator[]",
    },
    Entry {
        name: "front",
        container: Some("vector"),
        header: "<vector>",
        category: "Element Access",
        time_complexity: "O(1)",
        space_complexity: "O(1)",
        arguments: "none",
        arg_explanation: "No arguments",
        return_type: "T&",
        description: "Access first element",
        when_to_use: "Get/modify first element",
        when_not_to_use: "Empty vector (undefined behavior)",
        real_world_freq: 8,
        competitive_freq: 8,
        example: "int first = v.front();",
        notes: Some("Undefined if empty; check !v.empty() first"),
        since: Standard::Cpp98,
        related: "back, operator[]",
    },
    Entry {
        name: "back",
        container: Some("vector"),
        header: "<vector>",
        category: "Element Access",
        time_complexity: "O(1)",
        space_complexity: "O(1)",
        arguments: "none",
        arg_explanation: "No arguments",
        return_type: "T&",
        description: "Access last element",
        when_to_use: "Get/modify last element",
        when_not_to_use: "Empty vector (undefined behavior)",
        real_world_freq: 9,
        competitive_freq: 9,
        example: "int last = v.back();",
        notes: Some("Very common; undefined if empty"),
        since: Standard::Cpp98,
        related: "front, pop_back",
    },
    Entry {
        name: "data",
        container: Some("vector"),
        header: "<vector>",
        category: "Element Access",
        time_complexity: "O(1)",
        space_complexity: "O(1)",
        arguments: "none",
        arg_explanation: "No arguments",
        return_type: "T*",
        description: "Returns pointer to underlying array",
        when_to_use: "C API interop; direct memory access",
        when_not_to_use: "Normal iteration (use iterators)",
        real_world_freq: 6,
        competitive_freq: 3,
        example: "int* ptr = v.data(); some_c_function(ptr, v.size());",
        notes: Some("Useful for C interop; contiguous memory guaranteed"),
        since: Standard::Cpp11,
        related: "begin, operator[]",
    },
    Entry {
        name: "size",
        container: Some("vector"),
        header: "<vector>",
        category: "Capacity",
        time_complexity: "O(1)",
        space_complexity: "O(1)",
        arguments: "none",
        arg_explanation: "No arguments",
        return_type: "size_t",
        description: "Returns number of elements",
        when_to_use: "Check size; loop bounds; allocation",
        when_not_to_use: "Check if empty (use empty())",
        real_world_freq: 10,
        competitive_freq: 10,
        example: "for (size_t i = 0; i < v.size(); ++i) {}",
        notes: Some("Extremely common; constant time"),
        since: Standard::Cpp98,
        related: "empty, capacity",
    },
    Entry {
        name: "empty",
        container: Some("vector"),
        header: "<vector>",
        category: "Capacity",
        time_complexity: "O(1)",
        space_complexity: "O(1)",
        arguments: "none",
        arg_explanation: "No arguments",
        return_type: "bool",
        description: "Checks if container is empty",
        when_to_use: "Check emptiness; validation",
        when_not_to_use: "Need size (use size())",
        real_world_freq: 9,
        competitive_freq: 9,
        example: "if (!v.empty()) { process(v.front()); }",
        notes: Some("Preferred over size() == 0; more expressive"),
        since: Standard::Cpp98,
        related: "size",
    },
    Entry {
        name: "reserve",
        container: Some("vector"),
        header: "<vector>",
        category: "Capacity",
        time_complexity: "O(n)",
        space_complexity: "O(n)",
        arguments: "size_t new_cap",
        arg_explanation: "new_cap: new capacity",
        return_type: "void",
        description: "Reserves storage to avoid reallocations",
        when_to_use: "Know final size; optimize allocations; avoid invalidation",
        when_not_to_use: "Size unknown; memory constrained",
        real_world_freq: 7,
        competitive_freq: 5,
        example: "v.reserve(1000); // pre-allocate for 1000 elements",
        notes: Some("Important optimization; prevents iterator invalidation"),
        since: Standard::Cpp98,
        related: "capacity, resize, shrink_to_fit",
    },
    Entry {
        name: "capacity",
        container: Some("vector"),
        header: "<vector>",
        category: "Capacity",
        time_complexity: "O(1)",
        space_complexity: "O(1)",
        arguments: "none",
        arg_explanation: "No arguments",
        return_type: "size_t",
        description: "Returns allocated storage capacity",
        when_to_use: "Check allocation; understand memory",
        when_not_to_use: "Normal usage (internal detail)",
        real_world_freq: 4,
        competitive_freq: 2,
        example: "size_t cap = v.capacity();",
        notes: Some("Always >= size(); implementation defined growth"),
        since: Standard::Cpp98,
        related: "size, reserve",
    },
    Entry {
        name: "resize",
        container: Some("vector"),
        header: "<vector>",
        category: "Capacity",
        time_complexity: "O(n)",
        space_complexity: "O(n)",
        arguments: "size_t count, const T& value",
        arg_explanation: "count: new size; value: optional value for new elements",
        return_type: "void",
        description: "Changes size, adding/removing elements as needed",
        when_to_use: "Change size; initialize to specific size",
        when_not_to_use: "Just reserve capacity (use reserve)",
        real_world_freq: 7,
        competitive_freq: 7,
        example: "v.resize(100); v.resize(50, -1);",
        notes: Some("Can grow or shrink; new elements default-constructed"),
        since: Standard::Cpp98,
        related: "reserve, size",
    },
    Entry {
        name: "push_back",
        container: Some("vector"),
        header: "<vector>",
        category: "Modifiers",
        time_complexity: "Amortized O(1)",
        space_complexity: "O(1)",
        arguments: "const T& value or T&& value",
        arg_explanation: "value: element to add",
        return_type: "void",
        description: "Adds element to end",
        when_to_use: "Build vector; add elements",
        when_not_to_use: "Frequent front insertion (use deque)",
        real_world_freq: 10,
        competitive_freq: 10,
        example: "v.push_back(42);",
        notes: Some("Most common operation; amortized O(1)"),
        since: Standard::Cpp98,
        related: "emplace_back, pop_back",
    },
    Entry {
        name: "emplace_back",
        container: Some("vector"),
        header: "<vector>",
        category: "Modifiers",
        time_complexity: "Amortized O(1)",
        space_complexity: "O(1)",
        arguments: "Args&&... args",
        arg_explanation: "args: arguments to forward to constructor",
        return_type: "T& (C++17+)",
        description: "Constructs element in-place at end",
        when_to_use: "Avoid copy; construct directly; efficiency",
        when_not_to_use: "Simple types where copy is cheap",
        real_world_freq: 8,
        competitive_freq: 6,
        example: "v.emplace_back(arg1, arg2); // constructs T(arg1, arg2)",
        notes: Some("More efficient than push_back for complex types"),
        since: Standard::Cpp11,
        related: "push_back, emplace",
    },
    Entry {
        name: "pop_back",
        container: Some("vector"),
        header: "<vector>",
        category: "Modifiers",
        time_complexity: "O(1)",
        space_complexity: "O(1)",
        arguments: "none",
        arg_explanation: "No arguments",
        return_type: "void",
        description: "Removes last element",
        when_to_use: "Remove from end; stack operations",
        when_not_to_use: "Empty vector (undefined); need value (get with back() first)",
        real_world_freq: 9,
        competitive_freq: 9,
        example: "if (!v.empty()) v.pop_back();",
        notes: Some("Doesn't return value; check empty first"),
        since: Standard::Cpp98,
        related: "push_back, back",
    },
    Entry {
        name: "insert",
        container: Some("vector"),
        header: "<vector>",
        category: "Modifiers",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "const_iterator pos, const T& value",
        arg_explanation: "pos: position to insert; value: element to insert",
        return_type: "iterator",
        description: "Inserts element(s) before position",
        when_to_use: "Insert in middle; specific position",
        when_not_to_use: "Frequent inserts (use list); at end (use push_back)",
        real_world_freq: 6,
        competitive_freq: 6,
        example: "v.insert(v.begin() + 5, 42); v.insert(v.end(), 3, 99);",
        notes: Some("Expensive O(n); shifts elements; invalidates iterators"),
        since: Standard::Cpp98,
        related: "erase, emplace",
    },
    Entry {
        name: "erase",
        container: Some("vector"),
        header: "<vector>",
        category: "Modifiers",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "const_iterator pos or const_iterator first, const_iterator last",
        arg_explanation: "pos: element to remove; or first/last: range to remove",
        return_type: "iterator",
        description: "Removes element(s) from container",
        when_to_use: "Remove by position; erase-remove idiom",
        when_not_to_use: "Remove from end (use pop_back); by value (use erase-remove)",
        real_world_freq: 8,
        competitive_freq: 9,
        example: "v.erase(v.begin() + 5); v.erase(std::remove(v.begin(), v.end(), 42), v.end());",
        notes: Some("Erase-remove idiom essential; shifts elements"),
        since: Standard::Cpp98,
        related: "remove, remove_if",
    },
    Entry {
        name: "clear",
        container: Some("vector"),
        header: "<vector>",
        category: "Modifiers",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "none",
        arg_explanation: "No arguments",
        return_type: "void",
        description: "Removes all elements",
        when_to_use: "Empty container; reset state",
        when_not_to_use: "Need to free memory (doesn't affect capacity)",
        real_world_freq: 8,
        competitive_freq: 7,
        example: "v.clear();",
        notes: Some("Size becomes 0; capacity unchanged"),
        since: Standard::Cpp98,
        related: "erase, shrink_to_fit",
    },
    Entry {
        name: "swap",
        container: Some("vector"),
        header: "<vector>",
        category: "Modifiers",
        time_complexity: "O(1)",
        space_complexity: "O(1)",
        arguments: "vector& other",
        arg_explanation: "other: vector to swap with",
        return_type: "void",
        description: "Swaps contents with another vector",
        when_to_use: "Exchange vectors; move semantics",
        when_not_to_use: "Copy needed (use assignment)",
        real_world_freq: 6,
        competitive_freq: 5,
        example: "v1.swap(v2); std::swap(v1, v2);",
        notes: Some("Constant time; swaps pointers; iterators remain valid to swapped container"),
        since: Standard::Cpp98,
        related: "std::swap",
    },
];
