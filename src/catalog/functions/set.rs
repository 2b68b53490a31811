//! Member functions of `std::set` and `std::unordered_set`.

use crate::catalog::entry::{Entry, Standard};

pub(super) const SET_ENTRIES: &[Entry] = &[
    Entry {
        name: "insert",
        container: Some("set/unordered_set"),
        header: "<set>, <unordered_set>",
        category: "Modifiers",
        time_complexity: "O(log n) / O(1) avg",
        space_complexity: "O(1)",
        arguments: "const T& value",
        arg_explanation: "value: value to insert",
        return_type: "pair<iterator, bool>",
        description: "Inserts element if not present",
        when_to_use: "Add unique elements",
        when_not_to_use: "Duplicates needed (use multiset)",
        real_world_freq: 9,
        competitive_freq: 10,
        example: "auto [it, inserted] = set.insert(value);",
        notes: Some("Returns pair: iterator and whether inserted"),
        since: Standard::Cpp98,
        related: "emplace, erase",
    },
    Entry {
        name: "erase",
        container: Some("set/unordered_set"),
        header: "<set>, <unordered_set>",
        category: "Modifiers",
        time_complexity: "O(log n) / O(1) avg",
        space_complexity: "O(1)",
        arguments: "const T& value or iterator pos",
        arg_explanation: "value: value to remove or pos: iterator",
        return_type: "size_t or iterator",
        description: "Removes element",
        when_to_use: "Remove elements",
        when_not_to_use: "Clear all (use clear)",
        real_world_freq: 8,
        competitive_freq: 9,
        example: "set.erase(value);",
        notes: Some("By value returns count removed"),
        since: Standard::Cpp98,
        related: "insert, clear",
    },
    Entry {
        name: "find",
        container: Some("set/unordered_set"),
        header: "<set>, <unordered_set>",
        category: "Lookup",
        time_complexity: "O(log n) / O(1) avg",
        space_complexity: "O(1)",
        arguments: "const T& value",
        arg_explanation: "value: value to find",
        return_type: "iterator",
        description: "Finds element",
        when_to_use: "Check existence with iterator",
        when_not_to_use: "Just bool (use count or contains)",
        real_world_freq: 9,
        competitive_freq: 10,
        example: "auto it = set.find(value); if (it != set.end()) {...}",
        notes: Some("Returns end() if not found"),
        since: Standard::Cpp98,
        related: "count, contains",
    },
    Entry {
        name: "count",
        container: Some("set/unordered_set"),
        header: "<set>, <unordered_set>",
        category: "Lookup",
        time_complexity: "O(log n) / O(1) avg",
        space_complexity: "O(1)",
        arguments: "const T& value",
        arg_explanation: "value: value to count",
        return_type: "size_t",
        description: "Returns count (0 or 1 for set)",
        when_to_use: "Existence check as bool",
        when_not_to_use: "C++20 has contains; need iterator (use find)",
        real_world_freq: 8,
        competitive_freq: 9,
        example: "if (set.count(value)) {...}",
        notes: Some("Returns 0 or 1"),
        since: Standard::Cpp98,
        related: "find, contains",
    },
    Entry {
        name: "contains",
        container: Some("set/unordered_set"),
        header: "<set>, <unordered_set>",
        category: "Lookup",
        time_complexity: "O(log n) / O(1) avg",
        space_complexity: "O(1)",
        arguments: "const T& value",
        arg_explanation: "value: value to check",
        return_type: "bool",
        description: "Checks if value exists",
        when_to_use: "Simple existence check; modern C++",
        when_not_to_use: "Pre-C++20 (use count or find)",
        real_world_freq: 8,
        competitive_freq: 10,
        example: "if (set.contains(value)) {...}",
        notes: Some("Added C++20; very useful"),
        since: Standard::Cpp20,
        related: "count, find",
    },
    Entry {
        name: "lower_bound",
        container: Some("set"),
        header: "<set>",
        category: "Lookup",
        time_complexity: "O(log n)",
        space_complexity: "O(1)",
        arguments: "const T& value",
        arg_explanation: "value: value to find",
        return_type: "iterator",
        description: "First element >= value",
        when_to_use: "Range queries; ordered operations",
        when_not_to_use: "unordered_set (no ordering)",
        real_world_freq: 6,
        competitive_freq: 8,
        example: "auto it = set.lower_bound(value);",
        notes: Some("Only for ordered set; very useful in DSA"),
        since: Standard::Cpp98,
        related: "upper_bound, equal_range",
    },
    Entry {
        name: "upper_bound",
        container: Some("set"),
        header: "<set>",
        category: "Lookup",
        time_complexity: "O(log n)",
        space_complexity: "O(1)",
        arguments: "const T& value",
        arg_explanation: "value: value to find",
        return_type: "iterator",
        description: "First element > value",
        when_to_use: "Range queries; ordered operations",
        when_not_to_use: "unordered_set (no ordering)",
        real_world_freq: 5,
        competitive_freq: 8,
        example: "auto it = set.upper_bound(value);",
        notes: Some("Only for ordered set"),
        since: Standard::Cpp98,
        related: "lower_bound",
    },
];
