use super::records::DataStructure;

pub(super) const STRUCTURE_RECORDS: &[DataStructure] = &[
    DataStructure {
        category: "Linear - Array Based",
        name: "Fixed-size Array",
        concept: "Contiguous block of memory with fixed size",
        java: "T[] (primitive/object arrays)",
        cpp: "std::array<T,N> or T[]",
        python: "array.array() or list",
        javascript: "TypedArray or Array",
        access_by_index: "O(1)",
        access_front: "O(1)",
        access_back: "O(1)",
        insert_front: "O(n)",
        insert_middle: "O(n)",
        insert_back: "O(1) if space, O(n) if resize",
        delete_front: "O(n)",
        delete_middle: "O(n)",
        delete_back: "O(1)",
        search_unsorted: "O(n)",
        search_sorted: "O(log n)",
        memory_locality: "Excellent",
        memory_overhead: "Minimal",
        ordered: "Yes (insertion order)",
        duplicates: "Yes",
        thread_safe: "No",
        use_cases: "Matrices, buffers, lookup tables, image data, audio samples",
        industries: "Embedded systems, games, signal processing, graphics, scientific computing",
        when_to_use: "Size known at compile-time; maximum performance needed; memory constrained",
        when_not_to_use: "Size needs to grow dynamically; frequent inserts/deletes except at end",
    },
    DataStructure {
        category: "Linear - Array Based",
        name: "Dynamic Array (ArrayList/Vector)",
        concept: "Resizable array with amortized growth",
        java: "ArrayList<E>",
        cpp: "std::vector<T>",
        python: "list",
        javascript: "Array",
        access_by_index: "O(1)",
        access_front: "O(1)",
        access_back: "O(1)",
        insert_front: "O(n)",
        insert_middle: "O(n)",
        insert_back: "Amortized O(1)",
        delete_front: "O(n)",
        delete_middle: "O(n)",
        delete_back: "O(1)",
        search_unsorted: "O(n)",
        search_sorted: "O(log n)",
        memory_locality: "Excellent",
        memory_overhead: "Low (~1.5-2x capacity)",
        ordered: "Yes",
        duplicates: "Yes",
        thread_safe: "No",
        use_cases: "General collections, stacks, buffers, dynamic sequences",
        industries: "All software development",
        when_to_use: "Default choice for sequential data; random access needed; mostly appending",
        when_not_to_use: "Frequent insert/delete at start or middle",
    },
    DataStructure {
        category: "Linear - Array Based",
        name: "Deque (Double-Ended Queue)",
        concept: "Efficient operations at both ends",
        java: "ArrayDeque<E>",
        cpp: "std::deque<T>",
        python: "collections.deque",
        javascript: "Custom implementation",
        access_by_index: "O(1)",
        access_front: "O(1)",
        access_back: "O(1)",
        insert_front: "O(1)",
        insert_middle: "O(n)",
        insert_back: "O(1)",
        delete_front: "O(1)",
        delete_middle: "O(n)",
        delete_back: "O(1)",
        search_unsorted: "O(n)",
        search_sorted: "O(n)",
        memory_locality: "Good",
        memory_overhead: "Moderate",
        ordered: "Yes",
        duplicates: "Yes",
        thread_safe: "No",
        use_cases: "Task queues, sliding windows, BFS, work stealing",
        industries: "OS, schedulers, algorithms, game engines",
        when_to_use: "Need efficient operations at both ends; implementing queues/stacks",
        when_not_to_use: "Only appending to one end; frequent middle insertions",
    },
    DataStructure {
        category: "Linear - Linked",
        name: "Singly Linked List",
        concept: "Nodes with next pointer only",
        java: "Custom (LinkedList is doubly)",
        cpp: "std::forward_list<T>",
        python: "Custom",
        javascript: "Custom",
        access_by_index: "O(n)",
        access_front: "O(1)",
        access_back: "O(n) or O(1) with tail",
        insert_front: "O(1)",
        insert_middle: "O(1) at position, O(n) to find",
        insert_back: "O(n) or O(1) with tail",
        delete_front: "O(1)",
        delete_middle: "O(1) at position, O(n) to find",
        delete_back: "O(n)",
        search_unsorted: "O(n)",
        search_sorted: "O(n)",
        memory_locality: "Poor",
        memory_overhead: "One pointer per node",
        ordered: "Yes",
        duplicates: "Yes",
        thread_safe: "No",
        use_cases: "Simple queues, adjacency lists, memory-constrained insertions",
        industries: "Networking, OS, embedded systems",
        when_to_use: "Memory fragmented; only forward traversal; insertions at known positions",
        when_not_to_use: "Random access needed; backward traversal; cache performance matters",
    },
    DataStructure {
        category: "Linear - Linked",
        name: "Doubly Linked List",
        concept: "Nodes with next and previous pointers",
        java: "LinkedList<E>",
        cpp: "std::list<T>",
        python: "Custom",
        javascript: "Custom",
        access_by_index: "O(n)",
        access_front: "O(1)",
        access_back: "O(1)",
        insert_front: "O(1)",
        insert_middle: "O(1) at position, O(n) to find",
        insert_back: "O(1)",
        delete_front: "O(1)",
        delete_middle: "O(1) at position, O(n) to find",
        delete_back: "O(1)",
        search_unsorted: "O(n)",
        search_sorted: "O(n)",
        memory_locality: "Poor",
        memory_overhead: "Two pointers per node",
        ordered: "Yes",
        duplicates: "Yes",
        thread_safe: "No",
        use_cases: "LRU caches, browser history, playlists, undo/redo",
        industries: "OS, memory allocators, databases, GUI",
        when_to_use: "O(1) insert/delete at known positions; bidirectional traversal; splice ops",
        when_not_to_use: "Random access frequent; memory locality important",
    },
    DataStructure {
        category: "Hash-based - Set",
        name: "Hash Set",
        concept: "Unique elements using hash table",
        java: "HashSet<E>",
        cpp: "std::unordered_set<T>",
        python: "set",
        javascript: "Set",
        access_by_index: "N/A",
        access_front: "N/A",
        access_back: "N/A",
        insert_front: "N/A",
        insert_middle: "O(1) avg",
        insert_back: "O(1) avg",
        delete_front: "N/A",
        delete_middle: "O(1) avg by value",
        delete_back: "O(1) avg by value",
        search_unsorted: "O(1) avg, O(n) worst",
        search_sorted: "N/A",
        memory_locality: "Poor",
        memory_overhead: "Hash table + load factor",
        ordered: "No",
        duplicates: "No",
        thread_safe: "No",
        use_cases: "Deduplication, membership testing, unique elements, graph vertices",
        industries: "Web apps, data processing, ETL, analytics",
        when_to_use: "Fast membership checks; order doesn't matter; removing duplicates",
        when_not_to_use: "Need ordering; retrieve by index; duplicates needed",
    },
    DataStructure {
        category: "Hash-based - Map",
        name: "Hash Map",
        concept: "Key-value pairs with hash table",
        java: "HashMap<K,V>",
        cpp: "std::unordered_map<K,V>",
        python: "dict",
        javascript: "Map or Object",
        access_by_index: "N/A",
        access_front: "N/A",
        access_back: "N/A",
        insert_front: "N/A",
        insert_middle: "O(1) avg",
        insert_back: "O(1) avg",
        delete_front: "N/A",
        delete_middle: "O(1) avg by key",
        delete_back: "O(1) avg by key",
        search_unsorted: "O(1) avg by key",
        search_sorted: "N/A",
        memory_locality: "Poor",
        memory_overhead: "Buckets + chains/probing",
        ordered: "No",
        duplicates: "No duplicate keys",
        thread_safe: "No",
        use_cases: "Caching, dictionaries, frequencies, memoization, indexing",
        industries: "All industries - most common",
        when_to_use: "Default for key-value; fast lookups; order doesn't matter",
        when_not_to_use: "Need sorted keys; iteration order important",
    },
    DataStructure {
        category: "Hash-based - Map",
        name: "Linked Hash Map",
        concept: "Hash map maintaining insertion order",
        java: "LinkedHashMap<K,V>",
        cpp: "Custom",
        python: "dict (3.7+)",
        javascript: "Map",
        access_by_index: "N/A",
        access_front: "N/A",
        access_back: "N/A",
        insert_front: "N/A",
        insert_middle: "O(1) avg",
        insert_back: "O(1) avg",
        delete_front: "N/A",
        delete_middle: "O(1) avg by key",
        delete_back: "O(1) avg by key",
        search_unsorted: "O(1) avg by key",
        search_sorted: "N/A",
        memory_locality: "Poor",
        memory_overhead: "HashMap + linked list",
        ordered: "Yes (insertion)",
        duplicates: "No duplicate keys",
        thread_safe: "No",
        use_cases: "LRU cache, preserving order, access tracking",
        industries: "Caching, web servers, frameworks",
        when_to_use: "HashMap + predictable iteration; LRU caches",
        when_not_to_use: "Order doesn't matter; memory overhead critical",
    },
    DataStructure {
        category: "Tree - Balanced BST",
        name: "Red-Black Tree (Set)",
        concept: "Self-balancing BST with color rules",
        java: "TreeSet<E>",
        cpp: "std::set<T>",
        python: "sortedcontainers.SortedSet",
        javascript: "Custom",
        access_by_index: "N/A",
        access_front: "O(log n)",
        access_back: "O(log n)",
        insert_front: "O(log n)",
        insert_middle: "O(log n)",
        insert_back: "O(log n)",
        delete_front: "O(log n)",
        delete_middle: "O(log n)",
        delete_back: "O(log n)",
        search_unsorted: "N/A",
        search_sorted: "O(log n)",
        memory_locality: "Poor",
        memory_overhead: "Pointers + color bit",
        ordered: "Yes (sorted)",
        duplicates: "No",
        thread_safe: "No",
        use_cases: "Sorted collections, range queries, order statistics",
        industries: "Databases, OS, compilers, finance",
        when_to_use: "Need sorted unique elements; range queries; worst-case O(log n)",
        when_not_to_use: "Hash table's O(1) avg sufficient; memory overhead matters",
    },
    DataStructure {
        category: "Tree - Balanced BST",
        name: "Red-Black Tree (Map)",
        concept: "Self-balancing BST for key-value pairs",
        java: "TreeMap<K,V>",
        cpp: "std::map<K,V>",
        python: "sortedcontainers.SortedDict",
        javascript: "Custom",
        access_by_index: "N/A",
        access_front: "O(log n)",
        access_back: "O(log n)",
        insert_front: "O(log n)",
        insert_middle: "O(log n)",
        insert_back: "O(log n)",
        delete_front: "O(log n)",
        delete_middle: "O(log n)",
        delete_back: "O(log n)",
        search_unsorted: "N/A",
        search_sorted: "O(log n)",
        memory_locality: "Poor",
        memory_overhead: "Tree nodes",
        ordered: "Yes (by key)",
        duplicates: "No duplicate keys",
        thread_safe: "No",
        use_cases: "Ordered dictionaries, interval trees, range maps",
        industries: "Databases, finance, scheduling",
        when_to_use: "Need sorted keys; ceiling/floor ops; range queries",
        when_not_to_use: "HashMap performance adequate; order doesn't matter",
    },
    DataStructure {
        category: "Tree - Specialized",
        name: "B-Tree",
        concept: "Multi-key nodes optimized for disk",
        java: "Custom or DB libraries",
        cpp: "Custom or Boost",
        python: "Custom or DB libraries",
        javascript: "Custom",
        access_by_index: "N/A",
        access_front: "O(log n)",
        access_back: "O(log n)",
        insert_front: "O(log n)",
        insert_middle: "O(log n)",
        insert_back: "O(log n)",
        delete_front: "O(log n)",
        delete_middle: "O(log n)",
        delete_back: "O(log n)",
        search_unsorted: "N/A",
        search_sorted: "O(log n) fewer seeks",
        memory_locality: "Excellent within node",
        memory_overhead: "Moderate",
        ordered: "Yes (sorted)",
        duplicates: "Typically no",
        thread_safe: "Depends",
        use_cases: "Database indexes, file systems, disk structures",
        industries: "Databases (MySQL, PostgreSQL), file systems",
        when_to_use: "Disk-based storage; minimize disk I/O; database indexes",
        when_not_to_use: "In-memory structures; nodes don't align with blocks",
    },
    DataStructure {
        category: "Tree - Specialized",
        name: "Trie (Prefix Tree)",
        concept: "Character-based tree for strings",
        java: "Custom",
        cpp: "Custom",
        python: "pygtrie or custom",
        javascript: "Custom",
        access_by_index: "N/A",
        access_front: "N/A",
        access_back: "N/A",
        insert_front: "N/A",
        insert_middle: "O(m) where m=key length",
        insert_back: "O(m)",
        delete_front: "N/A",
        delete_middle: "O(m)",
        delete_back: "O(m)",
        search_unsorted: "N/A",
        search_sorted: "O(m) prefix search",
        memory_locality: "Poor",
        memory_overhead: "High",
        ordered: "Lexicographic",
        duplicates: "No",
        thread_safe: "No",
        use_cases: "Autocomplete, spell check, IP routing, dictionaries, DNA analysis",
        industries: "Search engines, networking, bioinformatics, text editors",
        when_to_use: "Prefix searches; autocomplete; keys share prefixes; lexicographic ops",
        when_not_to_use: "Keys random; simple hash map works; small datasets",
    },
    DataStructure {
        category: "Tree - Specialized",
        name: "Segment Tree",
        concept: "Binary tree for range queries",
        java: "Custom",
        cpp: "Custom",
        python: "Custom",
        javascript: "Custom",
        access_by_index: "O(log n) range",
        access_front: "O(1) if cached",
        access_back: "O(1) if cached",
        insert_front: "O(log n) update",
        insert_middle: "O(log n) update",
        insert_back: "O(log n) update",
        delete_front: "O(log n) update",
        delete_middle: "O(log n) update",
        delete_back: "O(log n) update",
        search_unsorted: "N/A",
        search_sorted: "O(log n) range query",
        memory_locality: "Moderate",
        memory_overhead: "~4n space",
        ordered: "Implicit by index",
        duplicates: "N/A",
        thread_safe: "No",
        use_cases: "Range min/max/sum, computational geometry, scheduling",
        industries: "Competitive programming, graphics, analytics",
        when_to_use: "Range queries with updates; interval problems; efficient query+update",
        when_not_to_use: "Static arrays (prefix sum works); only point queries",
    },
    DataStructure {
        category: "Heap",
        name: "Binary Heap (Priority Queue)",
        concept: "Complete binary tree, array-based",
        java: "PriorityQueue<E>",
        cpp: "std::priority_queue<T>",
        python: "heapq",
        javascript: "Custom",
        access_by_index: "N/A",
        access_front: "O(1) peek min/max",
        access_back: "N/A",
        insert_front: "N/A",
        insert_middle: "O(log n)",
        insert_back: "O(log n)",
        delete_front: "O(log n) extract",
        delete_middle: "O(n) find + O(log n) delete",
        delete_back: "N/A",
        search_unsorted: "O(n)",
        search_sorted: "N/A",
        memory_locality: "Excellent",
        memory_overhead: "Minimal",
        ordered: "Partial (heap order)",
        duplicates: "Yes",
        thread_safe: "No",
        use_cases: "Priority queues, scheduling, Dijkstra, heap sort, median",
        industries: "OS (scheduling), simulations, graph algorithms",
        when_to_use: "Need min/max efficiently; priority processing; k-largest/smallest",
        when_not_to_use: "Need full sorting; search by value; FIFO queues",
    },
    DataStructure {
        category: "Graph",
        name: "Adjacency List",
        concept: "Array/map of neighbor lists per vertex",
        java: "List<List<Integer>>",
        cpp: "vector<vector<int>>",
        python: "list of lists or dict",
        javascript: "Array of Arrays or Map",
        access_by_index: "O(1) vertex list",
        access_front: "O(1)",
        access_back: "O(1)",
        insert_front: "O(1) add vertex",
        insert_middle: "O(1) add edge",
        insert_back: "O(1) add edge",
        delete_front: "O(V+E) remove vertex",
        delete_middle: "O(degree) remove edge",
        delete_back: "O(degree) remove edge",
        search_unsorted: "O(degree) edge check",
        search_sorted: "O(log degree) if sorted",
        memory_locality: "Good for iteration",
        memory_overhead: "O(V+E) optimal",
        ordered: "No",
        duplicates: "Can represent multi-edges",
        thread_safe: "No",
        use_cases: "Graph algorithms (DFS, BFS), social networks, dependencies",
        industries: "Social media, routing, compilers, recommendations",
        when_to_use: "Default for graphs; sparse graphs; iterating neighbors",
        when_not_to_use: "Dense graphs; edge existence checks critical",
    },
    DataStructure {
        category: "Graph",
        name: "Adjacency Matrix",
        concept: "2D array for edge representation",
        java: "boolean[][] or int[][]",
        cpp: "vector<vector<bool>>",
        python: "2D list or numpy array",
        javascript: "2D Array",
        access_by_index: "O(1) edge check",
        access_front: "O(1)",
        access_back: "O(1)",
        insert_front: "O(V²) add vertex",
        insert_middle: "O(1) add edge",
        insert_back: "O(1) add edge",
        delete_front: "O(V²) remove vertex",
        delete_middle: "O(1) remove edge",
        delete_back: "O(1) remove edge",
        search_unsorted: "O(1) edge, O(V) neighbors",
        search_sorted: "N/A",
        memory_locality: "Excellent for dense",
        memory_overhead: "O(V²) always",
        ordered: "Implicit by index",
        duplicates: "No",
        thread_safe: "No",
        use_cases: "Dense graphs, Floyd-Warshall, game boards, grids",
        industries: "Game dev, network analysis, optimization",
        when_to_use: "Dense graphs; O(1) edge check critical; matrix algorithms",
        when_not_to_use: "Sparse graphs; iterating neighbors frequently",
    },
    DataStructure {
        category: "Specialized",
        name: "Bloom Filter",
        concept: "Probabilistic set with false positives",
        java: "Guava BloomFilter",
        cpp: "Boost or custom",
        python: "pybloom or custom",
        javascript: "bloomfilter.js",
        access_by_index: "N/A",
        access_front: "N/A",
        access_back: "N/A",
        insert_front: "N/A",
        insert_middle: "O(k) add, k=hash funcs",
        insert_back: "O(k)",
        delete_front: "N/A (no deletion)",
        delete_middle: "N/A",
        delete_back: "N/A",
        search_unsorted: "O(k) probabilistic",
        search_sorted: "N/A",
        memory_locality: "Good",
        memory_overhead: "Very low (bits)",
        ordered: "No",
        duplicates: "Implicit",
        thread_safe: "Can be",
        use_cases: "Cache filtering, spell check, deduplication, DB optimization",
        industries: "Databases (Cassandra), web crawlers, CDNs, blockchain",
        when_to_use: "Space premium; false positives OK; quick membership",
        when_not_to_use: "False positives unacceptable; deletions needed; exact counting",
    },
    DataStructure {
        category: "Specialized",
        name: "Disjoint Set (Union-Find)",
        concept: "Track disjoint set partitions",
        java: "Custom",
        cpp: "Custom",
        python: "Custom",
        javascript: "Custom",
        access_by_index: "O(α(n)) find",
        access_front: "N/A",
        access_back: "N/A",
        insert_front: "O(α(n)) union",
        insert_middle: "O(α(n)) union",
        insert_back: "O(α(n)) union",
        delete_front: "N/A (no delete)",
        delete_middle: "N/A",
        delete_back: "N/A",
        search_unsorted: "O(α(n)) connected",
        search_sorted: "N/A",
        memory_locality: "Good",
        memory_overhead: "O(n) parent array",
        ordered: "No",
        duplicates: "N/A",
        thread_safe: "No",
        use_cases: "Kruskal MST, cycle detection, connected components, segmentation",
        industries: "Graph algorithms, networks, image processing, social networks",
        when_to_use: "Connectivity queries; Kruskal; dynamic grouping",
        when_not_to_use: "Deletions needed; full graph structure required",
    },
    DataStructure {
        category: "Specialized",
        name: "LRU Cache",
        concept: "HashMap + doubly-linked list for LRU",
        java: "LinkedHashMap",
        cpp: "Custom (list + unordered_map)",
        python: "functools.lru_cache or custom",
        javascript: "Custom (Map + list)",
        access_by_index: "N/A",
        access_front: "O(1) most recent",
        access_back: "O(1) least recent",
        insert_front: "O(1) put",
        insert_middle: "O(1) put",
        insert_back: "O(1) put",
        delete_front: "O(1) evict LRU",
        delete_middle: "O(1) remove by key",
        delete_back: "O(1)",
        search_unsorted: "O(1) by key",
        search_sorted: "N/A",
        memory_locality: "Moderate",
        memory_overhead: "HashMap + list pointers",
        ordered: "Access order",
        duplicates: "No",
        thread_safe: "No",
        use_cases: "Caching, memoization, browser history, DB buffers",
        industries: "Web servers, databases, OS, CDNs",
        when_to_use: "Caching with size limit; LRU eviction makes sense",
        when_not_to_use: "Other eviction policies needed; unlimited caches",
    },
    DataStructure {
        category: "Specialized",
        name: "Skip List",
        concept: "Probabilistic multi-level linked lists",
        java: "ConcurrentSkipListMap/Set",
        cpp: "Custom or Boost",
        python: "Custom",
        javascript: "Custom",
        access_by_index: "O(log n) avg",
        access_front: "O(1)",
        access_back: "O(1) if tail",
        insert_front: "O(log n)",
        insert_middle: "O(log n) avg",
        insert_back: "O(log n)",
        delete_front: "O(log n)",
        delete_middle: "O(log n) avg",
        delete_back: "O(log n)",
        search_unsorted: "N/A",
        search_sorted: "O(log n) avg",
        memory_locality: "Poor",
        memory_overhead: "Multiple pointers",
        ordered: "Yes (sorted)",
        duplicates: "Typically no",
        thread_safe: "Java impl is lock-free",
        use_cases: "Concurrent sorted maps, DB indexes, in-memory DBs",
        industries: "Databases (Redis), concurrent systems",
        when_to_use: "Concurrent sorted map; simpler than balanced trees; lock-free",
        when_not_to_use: "Memory overhead concern; deterministic performance required",
    },
    DataStructure {
        category: "Linear - Stack/Queue",
        name: "Stack (LIFO)",
        concept: "Last-In-First-Out collection",
        java: "Stack<E> or ArrayDeque<E>",
        cpp: "std::stack<T>",
        python: "list (use append/pop)",
        javascript: "Array (push/pop)",
        access_by_index: "N/A",
        access_front: "O(1) peek top",
        access_back: "N/A",
        insert_front: "O(1) push",
        insert_middle: "N/A",
        insert_back: "N/A",
        delete_front: "O(1) pop",
        delete_middle: "N/A",
        delete_back: "N/A",
        search_unsorted: "O(n)",
        search_sorted: "N/A",
        memory_locality: "Excellent (array-based)",
        memory_overhead: "Minimal",
        ordered: "LIFO order",
        duplicates: "Yes",
        thread_safe: "No (use ConcurrentLinkedDeque)",
        use_cases: "Function call stack, expression evaluation, backtracking, undo/redo",
        industries: "Compilers, browsers, text editors, algorithms",
        when_to_use: "LIFO semantics needed; parsing; depth-first traversal",
        when_not_to_use: "Need FIFO; need to access middle elements; random access required",
    },
    DataStructure {
        category: "Linear - Stack/Queue",
        name: "Queue (FIFO)",
        concept: "First-In-First-Out collection",
        java: "Queue<E> interface (LinkedList, ArrayDeque)",
        cpp: "std::queue<T>",
        python: "collections.deque or queue.Queue",
        javascript: "Array (push/shift) or custom",
        access_by_index: "N/A",
        access_front: "O(1) peek",
        access_back: "O(1) peek rear",
        insert_front: "N/A",
        insert_middle: "N/A",
        insert_back: "O(1) enqueue",
        delete_front: "O(1) dequeue",
        delete_middle: "N/A",
        delete_back: "N/A",
        search_unsorted: "O(n)",
        search_sorted: "N/A",
        memory_locality: "Good (circular buffer impl)",
        memory_overhead: "Low",
        ordered: "FIFO order",
        duplicates: "Yes",
        thread_safe: "No (use ArrayBlockingQueue)",
        use_cases: "Task scheduling, BFS, request handling, print spooling, buffering",
        industries: "Operating systems, web servers, messaging systems, simulations",
        when_to_use: "FIFO processing; breadth-first traversal; producer-consumer",
        when_not_to_use: "Need LIFO; need priority-based access; random access needed",
    },
    DataStructure {
        category: "Linear - Stack/Queue",
        name: "Circular Buffer (Ring Buffer)",
        concept: "Fixed-size buffer with wrap-around",
        java: "Custom or ArrayBlockingQueue",
        cpp: "boost::circular_buffer",
        python: "collections.deque with maxlen",
        javascript: "Custom implementation",
        access_by_index: "O(1)",
        access_front: "O(1)",
        access_back: "O(1)",
        insert_front: "O(1)",
        insert_middle: "N/A",
        insert_back: "O(1)",
        delete_front: "O(1)",
        delete_middle: "N/A",
        delete_back: "O(1)",
        search_unsorted: "O(n)",
        search_sorted: "N/A",
        memory_locality: "Excellent (contiguous)",
        memory_overhead: "Fixed size overhead",
        ordered: "Yes (insertion order)",
        duplicates: "Yes",
        thread_safe: "Can be (with synchronization)",
        use_cases: "Audio/video buffering, logging systems, streaming data, fixed-size caches",
        industries: "Media streaming, embedded systems, real-time systems, networking",
        when_to_use: "Fixed memory constraint; streaming data; overwrite old data automatically",
        when_not_to_use: "Need dynamic size; need to preserve all historical data",
    },
    DataStructure {
        category: "Tree - Specialized",
        name: "AVL Tree",
        concept: "Strictly height-balanced BST",
        java: "Custom or Apache Commons",
        cpp: "Custom implementation",
        python: "Custom or bintrees library",
        javascript: "Custom implementation",
        access_by_index: "N/A",
        access_front: "O(log n)",
        access_back: "O(log n)",
        insert_front: "O(log n)",
        insert_middle: "O(log n)",
        insert_back: "O(log n)",
        delete_front: "O(log n)",
        delete_middle: "O(log n)",
        delete_back: "O(log n)",
        search_unsorted: "N/A",
        search_sorted: "O(log n)",
        memory_locality: "Poor",
        memory_overhead: "Height/balance factor per node",
        ordered: "Yes (sorted)",
        duplicates: "Depends on implementation",
        thread_safe: "No",
        use_cases: "Databases with read-heavy workloads, in-memory indexes, sorted data with frequent lookups",
        industries: "Databases, search systems, compilers",
        when_to_use: "Lookups more frequent than insertions; strict balancing needed",
        when_not_to_use: "Write-heavy workload (RB tree better); memory constrained",
    },
    DataStructure {
        category: "Tree - Specialized",
        name: "Suffix Tree",
        concept: "Compressed trie of all suffixes",
        java: "Custom implementation",
        cpp: "Custom implementation",
        python: "suffix-tree library",
        javascript: "Custom implementation",
        access_by_index: "N/A",
        access_front: "N/A",
        access_back: "N/A",
        insert_front: "O(n) construction",
        insert_middle: "O(n) for dynamic",
        insert_back: "O(n) construction",
        delete_front: "Complex",
        delete_middle: "Complex",
        delete_back: "Complex",
        search_unsorted: "O(m) pattern search",
        search_sorted: "O(m) pattern search",
        memory_locality: "Poor",
        memory_overhead: "O(n) nodes",
        ordered: "N/A",
        duplicates: "N/A",
        thread_safe: "No",
        use_cases: "Pattern matching, bioinformatics, longest common substring, plagiarism detection",
        industries: "Bioinformatics, search engines, text analysis, data compression",
        when_to_use: "Multiple pattern searches; substring problems; DNA sequence analysis",
        when_not_to_use: "Small texts; simple pattern matching; construction cost too high",
    },
    DataStructure {
        category: "Tree - Specialized",
        name: "Fenwick Tree (BIT)",
        concept: "Binary Indexed Tree for prefix queries",
        java: "Custom implementation",
        cpp: "Custom implementation",
        python: "Custom implementation",
        javascript: "Custom implementation",
        access_by_index: "O(log n) prefix query",
        access_front: "O(log n)",
        access_back: "O(log n)",
        insert_front: "O(log n) point update",
        insert_middle: "O(log n) point update",
        insert_back: "O(log n) point update",
        delete_front: "O(log n) point update",
        delete_middle: "O(log n) point update",
        delete_back: "O(log n) point update",
        search_unsorted: "N/A",
        search_sorted: "O(log n) prefix sum",
        memory_locality: "Excellent (array-based)",
        memory_overhead: "O(n) - same as input",
        ordered: "Implicit by index",
        duplicates: "N/A",
        thread_safe: "No",
        use_cases: "Cumulative frequency, range sum queries, inversion counting, order statistics",
        industries: "Competitive programming, analytics, time-series analysis",
        when_to_use: "Prefix sum queries with updates; simpler than segment tree",
        when_not_to_use: "Need complex range updates (use segment tree); static queries only",
    },
    DataStructure {
        category: "Specialized",
        name: "BitSet / Bit Vector",
        concept: "Compact array of bits",
        java: "BitSet",
        cpp: "std::bitset<N> or std::vector<bool>",
        python: "bitarray library or int operations",
        javascript: "Typed arrays or custom",
        access_by_index: "O(1)",
        access_front: "O(1)",
        access_back: "O(1)",
        insert_front: "N/A (fixed size typically)",
        insert_middle: "O(1) set bit",
        insert_back: "O(1) set bit",
        delete_front: "N/A",
        delete_middle: "O(1) clear bit",
        delete_back: "O(1) clear bit",
        search_unsorted: "O(n) scan bits",
        search_sorted: "O(n) find next set",
        memory_locality: "Excellent",
        memory_overhead: "Minimal (1 bit per flag)",
        ordered: "Implicit by position",
        duplicates: "N/A",
        thread_safe: "No",
        use_cases: "Flags, permissions, Sieve of Eratosthenes, compression, state tracking",
        industries: "Systems programming, compression, networking, algorithms",
        when_to_use: "Boolean flags; memory critical; set operations on integers; bitmasks",
        when_not_to_use: "Sparse sets (hash set better); need complex per-element data",
    },
    DataStructure {
        category: "Specialized",
        name: "Sparse Table",
        concept: "Precomputed table for immutable range queries",
        java: "Custom implementation",
        cpp: "Custom implementation",
        python: "Custom implementation",
        javascript: "Custom implementation",
        access_by_index: "O(1) range query",
        access_front: "O(1)",
        access_back: "O(1)",
        insert_front: "N/A (static)",
        insert_middle: "N/A (static)",
        insert_back: "N/A (static)",
        delete_front: "N/A",
        delete_middle: "N/A",
        delete_back: "N/A",
        search_unsorted: "N/A",
        search_sorted: "O(1) range min/max query",
        memory_locality: "Good",
        memory_overhead: "O(n log n) space",
        ordered: "N/A",
        duplicates: "N/A",
        thread_safe: "Yes (immutable)",
        use_cases: "Static range min/max/GCD queries, lowest common ancestor, immutable data analysis",
        industries: "Competitive programming, scientific computing, data analysis",
        when_to_use: "Static data; many range queries; O(1) query time needed",
        when_not_to_use: "Data changes (use segment tree); space is constrained",
    },
    DataStructure {
        category: "Specialized",
        name: "Count-Min Sketch",
        concept: "Probabilistic frequency counting",
        java: "stream-lib or Guava",
        cpp: "Custom implementation",
        python: "countminsketch library",
        javascript: "Custom implementation",
        access_by_index: "N/A",
        access_front: "N/A",
        access_back: "N/A",
        insert_front: "N/A",
        insert_middle: "O(k) increment (k hash functions)",
        insert_back: "O(k) increment",
        delete_front: "N/A (count-only variant)",
        delete_middle: "O(k) decrement (conservative update)",
        delete_back: "N/A",
        search_unsorted: "O(k) frequency estimate",
        search_sorted: "N/A",
        memory_locality: "Good",
        memory_overhead: "Very low (sublinear)",
        ordered: "No",
        duplicates: "Counts frequencies",
        thread_safe: "Can be",
        use_cases: "Heavy hitters, frequency estimation in streams, network traffic analysis",
        industries: "Big data analytics, network monitoring, streaming systems",
        when_to_use: "Massive streams; approximate counts acceptable; memory constrained",
        when_not_to_use: "Exact counts required; small datasets (use HashMap)",
    },
    DataStructure {
        category: "Specialized",
        name: "HyperLogLog",
        concept: "Probabilistic cardinality estimation",
        java: "stream-lib or Guava",
        cpp: "Custom or Redis implementation",
        python: "hyperloglog library",
        javascript: "Custom implementation",
        access_by_index: "N/A",
        access_front: "N/A",
        access_back: "N/A",
        insert_front: "N/A",
        insert_middle: "O(1) add element",
        insert_back: "O(1) add element",
        delete_front: "N/A (no deletion)",
        delete_middle: "N/A",
        delete_back: "N/A",
        search_unsorted: "O(1) cardinality estimate",
        search_sorted: "N/A",
        memory_locality: "Excellent",
        memory_overhead: "Very low (fixed small size)",
        ordered: "No",
        duplicates: "Automatically handled",
        thread_safe: "Can be",
        use_cases: "Unique visitor counting, distinct value estimation, database query optimization",
        industries: "Web analytics, databases (Redis), big data systems",
        when_to_use: "Count distinct elements in huge datasets; memory extremely limited; approximate OK",
        when_not_to_use: "Exact count required; small datasets (use HashSet)",
    },
    DataStructure {
        category: "Specialized",
        name: "Cuckoo Filter",
        concept: "Space-efficient probabilistic set with deletion support",
        java: "Custom implementation",
        cpp: "libcuckoo",
        python: "Custom implementation",
        javascript: "Custom implementation",
        access_by_index: "N/A",
        access_front: "N/A",
        access_back: "N/A",
        insert_front: "N/A",
        insert_middle: "O(1) avg insert",
        insert_back: "O(1) avg insert",
        delete_front: "N/A",
        delete_middle: "O(1) delete",
        delete_back: "N/A",
        search_unsorted: "O(1) membership test",
        search_sorted: "N/A",
        memory_locality: "Good",
        memory_overhead: "Very low",
        ordered: "No",
        duplicates: "Limited support",
        thread_safe: "Can be",
        use_cases: "Like Bloom filter but with deletion, deduplication, cache filtering",
        industries: "Databases, networking, distributed systems",
        when_to_use: "Need deletion support that Bloom filter lacks; space-efficient membership",
        when_not_to_use: "Exact membership required; unlimited insertions expected",
    },
    DataStructure {
        category: "Spatial",
        name: "KD-Tree",
        concept: "k-dimensional space partitioning tree",
        java: "Custom or JTS library",
        cpp: "Custom or CGAL",
        python: "scipy.spatial.KDTree",
        javascript: "Custom implementation",
        access_by_index: "N/A",
        access_front: "O(log n) avg nearest neighbor",
        access_back: "N/A",
        insert_front: "O(log n) avg",
        insert_middle: "O(log n) avg",
        insert_back: "O(log n) avg",
        delete_front: "O(log n) avg",
        delete_middle: "O(log n) avg",
        delete_back: "O(log n) avg",
        search_unsorted: "O(log n) avg nearest neighbor",
        search_sorted: "N/A",
        memory_locality: "Poor",
        memory_overhead: "Tree nodes",
        ordered: "Spatial ordering",
        duplicates: "Depends",
        thread_safe: "No",
        use_cases: "Nearest neighbor search, range search, point location, clustering",
        industries: "GIS, machine learning, computer graphics, robotics",
        when_to_use: "Low dimensions (<20); nearest neighbor queries; spatial indexing",
        when_not_to_use: "High dimensions (curse of dimensionality); dynamic data with many updates",
    },
    DataStructure {
        category: "Spatial",
        name: "Quadtree",
        concept: "2D space partitioning tree",
        java: "Custom implementation",
        cpp: "Custom implementation",
        python: "pyqtree library",
        javascript: "Custom implementation",
        access_by_index: "O(log n) avg",
        access_front: "O(log n)",
        access_back: "O(log n)",
        insert_front: "O(log n) avg",
        insert_middle: "O(log n) avg",
        insert_back: "O(log n) avg",
        delete_front: "O(log n) avg",
        delete_middle: "O(log n) avg",
        delete_back: "O(log n) avg",
        search_unsorted: "O(log n) avg region query",
        search_sorted: "N/A",
        memory_locality: "Poor",
        memory_overhead: "4 children per internal node",
        ordered: "Spatial quadrants",
        duplicates: "Depends",
        thread_safe: "No",
        use_cases: "Image processing, collision detection, spatial indexing, map rendering",
        industries: "Game development, GIS, computer graphics, simulations",
        when_to_use: "2D spatial data; hierarchical subdivision; range queries in 2D",
        when_not_to_use: "1D or 3D data; uniform grid sufficient; very dynamic data",
    },
    DataStructure {
        category: "Spatial",
        name: "R-Tree",
        concept: "Tree for indexing spatial rectangles",
        java: "JTS or custom",
        cpp: "Boost.Geometry or libspatialindex",
        python: "rtree library",
        javascript: "rbush library",
        access_by_index: "O(log n) avg",
        access_front: "O(log n)",
        access_back: "O(log n)",
        insert_front: "O(log n) avg",
        insert_middle: "O(log n) avg",
        insert_back: "O(log n) avg",
        delete_front: "O(log n) avg",
        delete_middle: "O(log n) avg",
        delete_back: "O(log n) avg",
        search_unsorted: "O(log n) avg range query",
        search_sorted: "N/A",
        memory_locality: "Moderate",
        memory_overhead: "Bounding boxes per node",
        ordered: "Spatial ordering",
        duplicates: "Yes",
        thread_safe: "No",
        use_cases: "GIS, spatial databases, map applications, CAD systems",
        industries: "Geographic information systems, databases (PostGIS), mapping",
        when_to_use: "Spatial rectangles/polygons; range/intersection queries; GIS applications",
        when_not_to_use: "Point data only (KD-tree better); 1D data",
    },
    DataStructure {
        category: "Concurrent",
        name: "Concurrent Hash Map",
        concept: "Thread-safe hash map with fine-grained locking",
        java: "ConcurrentHashMap<K,V>",
        cpp: "TBB concurrent_hash_map",
        python: "Custom with locks (GIL helps)",
        javascript: "N/A (single-threaded)",
        access_by_index: "N/A",
        access_front: "N/A",
        access_back: "N/A",
        insert_front: "N/A",
        insert_middle: "O(1) avg",
        insert_back: "O(1) avg",
        delete_front: "N/A",
        delete_middle: "O(1) avg",
        delete_back: "O(1) avg",
        search_unsorted: "O(1) avg",
        search_sorted: "N/A",
        memory_locality: "Moderate",
        memory_overhead: "Higher than HashMap (locks/segments)",
        ordered: "No",
        duplicates: "No duplicate keys",
        thread_safe: "Yes",
        use_cases: "Shared caches, concurrent servers, parallel algorithms, thread-safe mappings",
        industries: "High-performance servers, concurrent applications, real-time systems",
        when_to_use: "Multiple threads access map; high concurrency; lock-free performance needed",
        when_not_to_use: "Single-threaded; can synchronize externally; memory overhead critical",
    },
    DataStructure {
        category: "Concurrent",
        name: "Blocking Queue",
        concept: "Thread-safe queue with blocking operations",
        java: "ArrayBlockingQueue, LinkedBlockingQueue",
        cpp: "TBB concurrent_queue",
        python: "queue.Queue",
        javascript: "N/A (single-threaded)",
        access_by_index: "N/A",
        access_front: "O(1) blocking take",
        access_back: "O(1)",
        insert_front: "N/A",
        insert_middle: "N/A",
        insert_back: "O(1) blocking put",
        delete_front: "O(1) take",
        delete_middle: "N/A",
        delete_back: "N/A",
        search_unsorted: "O(n)",
        search_sorted: "N/A",
        memory_locality: "Good",
        memory_overhead: "Lock/condition overhead",
        ordered: "FIFO",
        duplicates: "Yes",
        thread_safe: "Yes",
        use_cases: "Producer-consumer, thread pools, task queues, message passing",
        industries: "Multi-threaded applications, web servers, background processing",
        when_to_use: "Producer-consumer pattern; thread coordination; bounded buffer needed",
        when_not_to_use: "Single-threaded; lock-free alternatives available; no blocking needed",
    },
    DataStructure {
        category: "String",
        name: "Rope (String)",
        concept: "Tree-based string for efficient editing",
        java: "Custom or Apache Commons",
        cpp: "SGI std::rope (deprecated) or custom",
        python: "Custom implementation",
        javascript: "Custom implementation",
        access_by_index: "O(log n)",
        access_front: "O(log n)",
        access_back: "O(log n)",
        insert_front: "O(log n)",
        insert_middle: "O(log n)",
        insert_back: "O(log n)",
        delete_front: "O(log n)",
        delete_middle: "O(log n)",
        delete_back: "O(log n)",
        search_unsorted: "O(n)",
        search_sorted: "N/A",
        memory_locality: "Poor (tree-based)",
        memory_overhead: "Tree nodes",
        ordered: "Character sequence",
        duplicates: "N/A",
        thread_safe: "No",
        use_cases: "Large text editing, text editors, string manipulation with many inserts/deletes",
        industries: "Text editors, IDEs, document processing",
        when_to_use: "Large strings (MB+); frequent insertions/deletions; many concatenations",
        when_not_to_use: "Small strings; mostly sequential access; simplicity preferred",
    },
    DataStructure {
        category: "String",
        name: "Suffix Array",
        concept: "Sorted array of all suffixes",
        java: "Custom implementation",
        cpp: "Custom implementation",
        python: "Custom or pysuffixarray",
        javascript: "Custom implementation",
        access_by_index: "O(log n) with binary search",
        access_front: "O(1)",
        access_back: "O(1)",
        insert_front: "O(n) rebuild",
        insert_middle: "O(n) rebuild",
        insert_back: "O(n) rebuild",
        delete_front: "O(n) rebuild",
        delete_middle: "O(n) rebuild",
        delete_back: "O(n) rebuild",
        search_unsorted: "N/A",
        search_sorted: "O(m log n) pattern search",
        memory_locality: "Excellent (array)",
        memory_overhead: "O(n) integers",
        ordered: "Suffix order",
        duplicates: "N/A",
        thread_safe: "No",
        use_cases: "Pattern matching, longest common substring, bioinformatics, data compression",
        industries: "Bioinformatics, text processing, search engines",
        when_to_use: "Space-efficient suffix structure; pattern matching; static text",
        when_not_to_use: "Dynamic text (suffix tree better for some queries); simple pattern matching",
    },
];
