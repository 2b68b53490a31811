//! Quick reference for containers without a dedicated method sheet.

use crate::catalog::entry::{ContainerSummary, Standard};

pub(super) const CONTAINER_SUMMARIES: &[ContainerSummary] = &[
    ContainerSummary {
        name: "deque",
        header: "<deque>",
        kind: "Sequence",
        key_methods: "push_front, pop_front, push_back, pop_back, operator[], at",
        use_case: "Double-ended operations; both ends efficient",
        compared_with: "vector",
        tradeoffs: "Better for front operations; slightly slower random access",
        real_world_freq: 6,
        competitive_freq: 7,
        notes: Some("Chunked storage; no contiguity guarantee; insertions at ends keep references valid"),
        since: Standard::Cpp98,
    },
    ContainerSummary {
        name: "list",
        header: "<list>",
        kind: "Sequence",
        key_methods: "push_front, push_back, insert, erase, splice, sort",
        use_case: "Frequent insertions/deletions at known positions",
        compared_with: "vector",
        tradeoffs: "No random access; O(1) insert/erase; poor cache locality",
        real_world_freq: 4,
        competitive_freq: 3,
        notes: Some("Doubly linked; splice moves nodes in O(1); use member sort, not std::sort"),
        since: Standard::Cpp98,
    },
    ContainerSummary {
        name: "forward_list",
        header: "<forward_list>",
        kind: "Sequence",
        key_methods: "push_front, insert_after, erase_after",
        use_case: "Memory-constrained singly-linked list",
        compared_with: "list",
        tradeoffs: "Half memory of list; no backward traversal",
        real_world_freq: 2,
        competitive_freq: 2,
        notes: Some("No size() member; operations act on the element after the iterator"),
        since: Standard::Cpp11,
    },
    ContainerSummary {
        name: "stack",
        header: "<stack>",
        kind: "Adapter",
        key_methods: "push, pop, top, empty, size",
        use_case: "LIFO operations; DFS, expression evaluation",
        compared_with: "deque",
        tradeoffs: "Restricts deque to one end; clearer intent, no iteration",
        real_world_freq: 8,
        competitive_freq: 9,
        notes: Some("Adapter (default: deque); no iterators"),
        since: Standard::Cpp98,
    },
    ContainerSummary {
        name: "queue",
        header: "<queue>",
        kind: "Adapter",
        key_methods: "push, pop, front, back, empty, size",
        use_case: "FIFO operations; BFS, task queues",
        compared_with: "deque",
        tradeoffs: "Restricts deque to push back, pop front; no random access",
        real_world_freq: 7,
        competitive_freq: 9,
        notes: Some("Adapter (default: deque); no iterators"),
        since: Standard::Cpp98,
    },
    ContainerSummary {
        name: "priority_queue",
        header: "<queue>",
        kind: "Adapter",
        key_methods: "push, pop, top, empty, size",
        use_case: "Heap operations; Dijkstra, scheduling, top-k",
        compared_with: "set",
        tradeoffs: "Cheaper constant factors than set; only the top element is reachable",
        real_world_freq: 7,
        competitive_freq: 10,
        notes: Some("Max heap by default; no iterators; adapter over vector"),
        since: Standard::Cpp98,
    },
    ContainerSummary {
        name: "array",
        header: "<array>",
        kind: "Sequence",
        key_methods: "operator[], at, front, back, fill, size",
        use_case: "Fixed-size array with STL interface",
        compared_with: "vector",
        tradeoffs: "Fixed size; stack allocated; no dynamic growth",
        real_world_freq: 6,
        competitive_freq: 5,
        notes: Some("Aggregate type; size is part of the type; works with structured bindings"),
        since: Standard::Cpp11,
    },
    ContainerSummary {
        name: "multiset",
        header: "<set>",
        kind: "Associative",
        key_methods: "insert, erase, count, find, lower_bound, upper_bound",
        use_case: "Sorted collection with duplicates",
        compared_with: "set",
        tradeoffs: "Allows duplicates; count can be > 1",
        real_world_freq: 4,
        competitive_freq: 6,
        notes: Some("erase(value) removes every copy; erase(find(value)) removes one"),
        since: Standard::Cpp98,
    },
    ContainerSummary {
        name: "multimap",
        header: "<map>",
        kind: "Associative",
        key_methods: "insert, erase, count, find, equal_range",
        use_case: "Key-value with duplicate keys",
        compared_with: "map",
        tradeoffs: "Multiple values per key",
        real_world_freq: 3,
        competitive_freq: 4,
        notes: Some("No operator[]; iterate a key's values with equal_range"),
        since: Standard::Cpp98,
    },
];
