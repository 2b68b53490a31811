use super::records::Concept;

pub(super) const CONCEPT_RECORDS: &[Concept] = &[
    Concept {
        concept: "Hash Table",
        explanation: "Data structure using hash function to map keys to buckets. Provides average O(1) lookup, insert, delete. Collision handling via chaining (linked lists) or open addressing (probing).",
        industries: "Web development, databases, caching systems, compilers, interpreters",
        when_used: "Dictionaries, caches, symbol tables, frequency counting, memoization, deduplication",
        when_not_used: "When ordered iteration required; when worst-case guarantees needed; when keys need sorting",
    },
    Concept {
        concept: "Balanced Binary Search Tree",
        explanation: "Self-balancing tree maintaining O(log n) height through rotations. Variants include AVL (strict height balance), Red-Black (relaxed balance, fewer rotations), and B-Tree (multi-key nodes for disk).",
        industries: "Database management, operating systems, compilers, financial systems",
        when_used: "Sorted collections, range queries, order statistics, ceiling/floor operations, sorted maps/sets",
        when_not_used: "When hash table's average O(1) is sufficient; when order doesn't matter; high memory overhead unacceptable",
    },
    Concept {
        concept: "Trie / Radix Tree",
        explanation: "Tree where each node represents a character/prefix. Enables efficient prefix operations. Radix tree is compressed version merging single-child paths. High memory usage but excellent for prefix queries.",
        industries: "Search engines, networking (IP routing), text processing, autocomplete systems, bioinformatics",
        when_used: "Autocomplete, spell checking, prefix matching, IP routing tables, dictionary implementations",
        when_not_used: "Keys are random without shared prefixes; memory is limited; simple lookups without prefix queries",
    },
    Concept {
        concept: "Heap",
        explanation: "Complete binary tree maintaining heap property (parent ≥/≤ children). Typically array-based for cache efficiency. Enables O(1) min/max access and O(log n) insert/extract.",
        industries: "Operating systems (process scheduling), event simulation, graph algorithms, real-time systems",
        when_used: "Priority queues, event scheduling, Dijkstra/Prim algorithms, heap sort, k-largest/smallest elements",
        when_not_used: "When full sorting needed; when searching by arbitrary value; for FIFO queues; ordered iteration required",
    },
    Concept {
        concept: "B-Tree / B+Tree",
        explanation: "Multi-way balanced tree with multiple keys per node, optimized for block-based storage (disk/SSD). Keeps tree shallow to minimize disk seeks. B+Tree stores data only in leaves for better range scans.",
        industries: "Database management systems, file systems, storage engines",
        when_used: "Database indexes, disk-based data structures, file systems (NTFS, ext4), when minimizing I/O operations",
        when_not_used: "Small in-memory datasets; when node size doesn't align with block size; simpler BST sufficient",
    },
    Concept {
        concept: "Graph Representations",
        explanation: "Adjacency List: array/map of neighbor lists, O(V+E) space, best for sparse graphs. Adjacency Matrix: 2D array, O(V²) space, O(1) edge checks, best for dense graphs.",
        industries: "Social networks, routing systems, compilers, recommendation engines, network analysis",
        when_used: "Social graphs, dependency analysis, routing algorithms, network topology, web crawling",
        when_not_used: "Adjacency list for dense graphs (use matrix); adjacency matrix for sparse (wastes memory)",
    },
    Concept {
        concept: "Disjoint Set (Union-Find)",
        explanation: "Tracks partition of elements into disjoint sets. With path compression and union by rank, achieves nearly O(1) operations (inverse Ackermann function). No deletion support.",
        industries: "Graph algorithms, network connectivity analysis, image segmentation, clustering",
        when_used: "Kruskal's MST, cycle detection, connected components, dynamic connectivity, percolation",
        when_not_used: "When deletions required; when full graph structure needed; when simple DFS/BFS works",
    },
    Concept {
        concept: "Bloom Filter",
        explanation: "Probabilistic data structure for set membership testing. Uses multiple hash functions and bit array. Space-efficient but allows false positives (never false negatives). No deletion in standard implementation.",
        industries: "Databases (query optimization), web crawlers, CDNs, blockchain, spam filtering",
        when_used: "Cache filtering, spell checkers, duplicate prevention, when space is premium and false positives acceptable",
        when_not_used: "False positives unacceptable; deletions needed; exact counting required; small datasets",
    },
    Concept {
        concept: "Segment Tree / Fenwick Tree",
        explanation: "Segment Tree: binary tree for range queries/updates (sum, min, max), O(log n) per op, ~4n space. Fenwick/BIT: array-based for prefix sums, simpler, O(n) space, only supports cumulative operations.",
        industries: "Competitive programming, analytics, time-series analysis, computational geometry",
        when_used: "Range queries with updates, interval problems, prefix sums, dynamic cumulative frequencies",
        when_not_used: "Static arrays (simple prefix sum array works); only point queries; when simple scan acceptable",
    },
    Concept {
        concept: "Skip List",
        explanation: "Probabilistic alternative to balanced BST using multi-level linked lists. Each level is express lane for level below. Simpler implementation than red-black trees, naturally supports concurrency.",
        industries: "Concurrent systems, databases (Redis uses skip lists), distributed systems",
        when_used: "Concurrent sorted maps, when simpler than balanced trees, lock-free data structures, in-memory databases",
        when_not_used: "Memory overhead is concern; deterministic worst-case bounds required; non-concurrent scenarios",
    },
    Concept {
        concept: "LRU Cache",
        explanation: "Combines hash map for O(1) access with doubly-linked list for O(1) eviction. Most recently used items at front, least at back. On access, move item to front. When full, evict from back.",
        industries: "Web servers, databases, operating systems (page replacement), CDN systems",
        when_used: "Caching with size limits, memoization, browser history, database buffer pools, page replacement",
        when_not_used: "Other eviction policies needed (LFU, FIFO); unlimited cache; access pattern not temporal",
    },
    Concept {
        concept: "Trie Variants (Suffix Tree/Array)",
        explanation: "Suffix Tree: tree of all suffixes for fast substring queries, O(n) space, O(m) pattern search. Suffix Array: sorted array of suffixes, more space-efficient, requires LCP array for some queries.",
        industries: "Bioinformatics (DNA analysis), search engines, plagiarism detection, data compression",
        when_used: "Pattern matching, longest common substring, string indexing, DNA sequence analysis, full-text search",
        when_not_used: "Small texts; simple pattern matching (KMP/Boyer-Moore suffices); construction cost prohibitive",
    },
    Concept {
        concept: "Probabilistic Data Structures",
        explanation: "Space-efficient structures trading exactness for memory: Bloom Filter (membership, false positives), Count-Min Sketch (frequency), HyperLogLog (cardinality), Cuckoo Filter (membership with deletion). Use hash functions for probabilistic guarantees.",
        industries: "Big data, streaming analytics, databases, web scale systems, network monitoring",
        when_used: "Massive datasets; memory constrained; approximate answers acceptable; real-time streaming",
        when_not_used: "Exact results required; small datasets fit in memory; strict accuracy needed",
    },
    Concept {
        concept: "Spatial Data Structures",
        explanation: "Structures optimized for spatial queries: KD-Tree (k-dimensional points), Quadtree/Octree (2D/3D regions), R-Tree (rectangles). Enable efficient range and nearest-neighbor queries in geometric space.",
        industries: "Geographic information systems (GIS), computer graphics, game development, robotics, CAD",
        when_used: "Spatial/geometric data; nearest neighbor; collision detection; map rendering; location-based queries",
        when_not_used: "1D data; no spatial relationships; simple coordinate lookups",
    },
    Concept {
        concept: "Concurrent Data Structures",
        explanation: "Thread-safe structures for multi-threaded environments: ConcurrentHashMap (fine-grained locking), BlockingQueue (producer-consumer), Skip List (lock-free sorted). Avoid race conditions while maintaining performance.",
        industries: "Multi-threaded servers, parallel computing, real-time systems, high-performance computing",
        when_used: "Multiple threads; shared data; parallel algorithms; producer-consumer patterns",
        when_not_used: "Single-threaded; external synchronization sufficient; performance overhead unacceptable",
    },
    Concept {
        concept: "Stack vs Queue vs Deque",
        explanation: "Stack: LIFO (Last-In-First-Out) for depth-first, function calls, undo. Queue: FIFO (First-In-First-Out) for breadth-first, task scheduling. Deque: efficient at both ends, combines both use cases.",
        industries: "All software - fundamental structures in compilers, OS, algorithms, simulations",
        when_used: "Stack: recursion elimination, parsing, DFS. Queue: BFS, task scheduling, buffering. Deque: sliding window, both-end access",
        when_not_used: "Stack: for FIFO. Queue: for LIFO or priority. Deque: when simple stack/queue suffices",
    },
    Concept {
        concept: "Range Query Structures",
        explanation: "Segment Tree: mutable range queries (sum, min, max) with O(log n) update. Fenwick/BIT: simpler, prefix sums only. Sparse Table: static data, O(1) query. Each optimized for different update/query patterns.",
        industries: "Competitive programming, time-series analysis, computational geometry, game development",
        when_used: "Range sum/min/max queries; interval updates; cumulative statistics; dynamic data analysis",
        when_not_used: "Point queries only; static data with no queries; simple array scan acceptable",
    },
];
