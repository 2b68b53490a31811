use super::records::LibrarySet;

pub(super) const LIBRARY_RECORDS: &[LibrarySet] = &[
    LibrarySet {
        language: "Java",
        category: "Collections Framework",
        libraries: "java.util: ArrayList, LinkedList, HashMap, TreeMap, HashSet, TreeSet, PriorityQueue, ArrayDeque, LinkedHashMap, BitSet, ConcurrentHashMap, ConcurrentSkipListMap",
    },
    LibrarySet {
        language: "Java",
        category: "Third-party",
        libraries: "Google Guava: Multimap, BiMap, Table, BloomFilter, Cache. Apache Commons: CircularFifoQueue. FastUtil: optimized primitive collections",
    },
    LibrarySet {
        language: "C++",
        category: "STL",
        libraries: "Sequence: vector, deque, list, forward_list, array. Associative: map, multimap, set, multiset, unordered_map, unordered_multimap, unordered_set, unordered_multiset. Adapters: stack, queue, priority_queue",
    },
    LibrarySet {
        language: "C++",
        category: "Third-party",
        libraries: "Boost: circular_buffer, multi_index, graph library, property_tree. abseil: flat_hash_map, node_hash_map. folly: F14 hash maps",
    },
    LibrarySet {
        language: "Python",
        category: "Built-in",
        libraries: "list, dict, set, tuple, collections.deque, collections.defaultdict, collections.Counter, collections.OrderedDict, heapq module, array.array",
    },
    LibrarySet {
        language: "Python",
        category: "Third-party",
        libraries: "sortedcontainers: SortedList, SortedDict, SortedSet. pygtrie: trie implementations. bintrees: AVL, RB trees. bitarray: efficient bit arrays",
    },
    LibrarySet {
        language: "JavaScript",
        category: "Built-in",
        libraries: "Array, Map, Set, WeakMap, WeakSet, TypedArray (Int8Array, Uint8Array, Float32Array, etc.)",
    },
    LibrarySet {
        language: "JavaScript",
        category: "Third-party (npm)",
        libraries: "immutable.js: persistent data structures. lodash: utility functions. collections: MultiMap, SortedSet. datastructures-js: various implementations. mnemonist: trie, bloom filter, etc.",
    },
];
