//! Member functions shared by `std::map` and `std::unordered_map`.

use crate::catalog::entry::{Entry, Standard};

pub(super) const MAP_ENTRIES: &[Entry] = &[
    Entry {
        name: "operator[]",
        container: Some("map/unordered_map"),
        header: "<map>, <unordered_map>",
        category: "Element Access",
        time_complexity: "O(log n) / O(1) avg",
        space_complexity: "O(1)",
        arguments: "const Key& key",
        arg_explanation: "key: key to access",
        return_type: "T&",
        description: "Access or insert element with key",
        when_to_use: "Access with default insert; simple syntax",
        when_not_to_use: "Don't want insertion (use find); const map",
        real_world_freq: 10,
        competitive_freq: 10,
        example: "map[key] = value; int val = map[key];",
        notes: Some("Creates element if doesn't exist; can't use on const map"),
        since: Standard::Cpp98,
        related: "at, insert, find",
    },
    Entry {
        name: "at",
        container: Some("map/unordered_map"),
        header: "<map>, <unordered_map>",
        category: "Element Access",
        time_complexity: "O(log n) / O(1) avg",
        space_complexity: "O(1)",
        arguments: "const Key& key",
        arg_explanation: "key: key to access",
        return_type: "T&",
        description: "Access element (throws if not found)",
        when_to_use: "Safe access; no insertion; const maps",
        when_not_to_use: "Want default insert (use [])",
        real_world_freq: 6,
        competitive_freq: 5,
        example: "int val = map.at(key);",
        notes: Some("Throws out_of_range; doesn't insert"),
        since: Standard::Cpp11,
        related: "operator[], find",
    },
    Entry {
        name: "insert",
        container: Some("map/unordered_map"),
        header: "<map>, <unordered_map>",
        category: "Modifiers",
        time_complexity: "O(log n) / O(1) avg",
        space_complexity: "O(1)",
        arguments: "const value_type& value",
        arg_explanation: "value: pair<Key,Value> to insert",
        return_type: "pair<iterator, bool>",
        description: "Inserts element if key doesn't exist",
        when_to_use: "Check if inserted; no overwrite",
        when_not_to_use: "Want to overwrite (use [] or insert_or_assign)",
        real_world_freq: 8,
        competitive_freq: 8,
        example: "auto [it, inserted] = map.insert({key, value});",
        notes: Some("Returns pair: iterator and whether inserted"),
        since: Standard::Cpp98,
        related: "operator[], emplace",
    },
    Entry {
        name: "emplace",
        container: Some("map/unordered_map"),
        header: "<map>, <unordered_map>",
        category: "Modifiers",
        time_complexity: "O(log n) / O(1) avg",
        space_complexity: "O(1)",
        arguments: "Args&&... args",
        arg_explanation: "args: arguments to construct pair",
        return_type: "pair<iterator, bool>",
        description: "Constructs element in-place",
        when_to_use: "Efficiency; avoid copy; complex values",
        when_not_to_use: "Simple insertion (insert or [] is clearer)",
        real_world_freq: 7,
        competitive_freq: 6,
        example: "map.emplace(key, value);",
        notes: Some("More efficient than insert for complex types"),
        since: Standard::Cpp11,
        related: "insert",
    },
    Entry {
        name: "erase",
        container: Some("map/unordered_map"),
        header: "<map>, <unordered_map>",
        category: "Modifiers",
        time_complexity: "O(log n) / O(1) avg",
        space_complexity: "O(1)",
        arguments: "const Key& key or iterator pos",
        arg_explanation: "key: key to remove or pos: iterator to element",
        return_type: "size_t or iterator",
        description: "Removes element by key or iterator",
        when_to_use: "Remove elements",
        when_not_to_use: "Clearing all (use clear)",
        real_world_freq: 8,
        competitive_freq: 9,
        example: "map.erase(key); map.erase(it);",
        notes: Some("By key returns count removed (0 or 1)"),
        since: Standard::Cpp98,
        related: "clear",
    },
    Entry {
        name: "find",
        container: Some("map/unordered_map"),
        header: "<map>, <unordered_map>",
        category: "Lookup",
        time_complexity: "O(log n) / O(1) avg",
        space_complexity: "O(1)",
        arguments: "const Key& key",
        arg_explanation: "key: key to find",
        return_type: "iterator",
        description: "Finds element by key",
        when_to_use: "Check existence; get iterator; no insertion",
        when_not_to_use: "Want default value (use [])",
        real_world_freq: 9,
        competitive_freq: 10,
        example: "auto it = map.find(key); if (it != map.end()) {...}",
        notes: Some("Essential for checking existence; returns end() if not found"),
        since: Standard::Cpp98,
        related: "count, contains",
    },
    Entry {
        name: "count",
        container: Some("map/unordered_map"),
        header: "<map>, <unordered_map>",
        category: "Lookup",
        time_complexity: "O(log n) / O(1) avg",
        space_complexity: "O(1)",
        arguments: "const Key& key",
        arg_explanation: "key: key to count",
        return_type: "size_t",
        description: "Returns count of elements (0 or 1 for map)",
        when_to_use: "Check existence as bool",
        when_not_to_use: "Need iterator (use find); C++20 has contains",
        real_world_freq: 7,
        competitive_freq: 8,
        example: "if (map.count(key)) {...}",
        notes: Some("Returns 0 or 1 for map (not multimap)"),
        since: Standard::Cpp98,
        related: "find, contains",
    },
    Entry {
        name: "contains",
        container: Some("map/unordered_map"),
        header: "<map>, <unordered_map>",
        category: "Lookup",
        time_complexity: "O(log n) / O(1) avg",
        space_complexity: "O(1)",
        arguments: "const Key& key",
        arg_explanation: "key: key to check",
        return_type: "bool",
        description: "Checks if key exists",
        when_to_use: "Simple existence check; modern C++",
        when_not_to_use: "Pre-C++20 (use count or find)",
        real_world_freq: 8,
        competitive_freq: 9,
        example: "if (map.contains(key)) {...}",
        notes: Some("Added C++20; clearer than count"),
        since: Standard::Cpp20,
        related: "count, find",
    },
    Entry {
        name: "size",
        container: Some("map/unordered_map"),
        header: "<map>, <unordered_map>",
        category: "Capacity",
        time_complexity: "O(1)",
        space_complexity: "O(1)",
        arguments: "none",
        arg_explanation: "No arguments",
        return_type: "size_t",
        description: "Returns number of elements",
        when_to_use: "Get size; check emptiness",
        when_not_to_use: "Just checking empty (use empty())",
        real_world_freq: 9,
        competitive_freq: 9,
        example: "size_t n = map.size();",
        notes: Some("Constant time"),
        since: Standard::Cpp98,
        related: "empty",
    },
    Entry {
        name: "clear",
        container: Some("map/unordered_map"),
        header: "<map>, <unordered_map>",
        category: "Modifiers",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "none",
        arg_explanation: "No arguments",
        return_type: "void",
        description: "Removes all elements",
        when_to_use: "Empty map; reset state",
        when_not_to_use: "Removing few elements (use erase)",
        real_world_freq: 7,
        competitive_freq: 7,
        example: "map.clear();",
        notes: Some("Size becomes 0"),
        since: Standard::Cpp98,
        related: "erase",
    },
];
