use super::records::UseCaseScenario;

pub(super) const USE_CASE_RECORDS: &[UseCaseScenario] = &[
    UseCaseScenario {
        scenario: "Caching with size limit",
        requirements: "Fast access, automatic eviction, size bounded",
        best_choice: "LRU Cache (LinkedHashMap + eviction)",
        why: "O(1) access and update, automatic eviction of least recently used",
        avoid: "Regular HashMap (no eviction), TreeMap (slower access)",
    },
    UseCaseScenario {
        scenario: "Autocomplete / prefix search",
        requirements: "Fast prefix matching, many queries",
        best_choice: "Trie (Prefix Tree)",
        why: "O(m) prefix search where m=query length, natural prefix operations",
        avoid: "Hash map (can't do prefix), sorted array (slower), BST (not optimized for prefixes)",
    },
    UseCaseScenario {
        scenario: "Finding k largest elements",
        requirements: "Efficiently maintain top k items from stream",
        best_choice: "Min-Heap of size k",
        why: "O(log k) insert, O(1) access to k-th largest, space O(k)",
        avoid: "Sorting entire stream O(n log n), array scan O(nk)",
    },
    UseCaseScenario {
        scenario: "Duplicate detection in stream",
        requirements: "Fast membership test, memory constrained",
        best_choice: "Bloom Filter (if false positives OK) or Hash Set",
        why: "Bloom: minimal memory, O(k) check. HashSet: exact, O(1) average",
        avoid: "Sorted array (slow insert), trie (memory overhead)",
    },
    UseCaseScenario {
        scenario: "Range queries with updates",
        requirements: "Find min/max/sum in range, update values",
        best_choice: "Segment Tree or Fenwick Tree",
        why: "O(log n) query and update, segment tree more flexible",
        avoid: "Array (O(n) query), BST (not designed for ranges)",
    },
    UseCaseScenario {
        scenario: "Scheduling with priorities",
        requirements: "Always process highest priority, add new tasks",
        best_choice: "Priority Queue (Binary Heap)",
        why: "O(1) peek max priority, O(log n) insert/extract",
        avoid: "Sorted array (O(n) insert), unsorted (O(n) find max)",
    },
    UseCaseScenario {
        scenario: "Undo/Redo in text editor",
        requirements: "Track history, navigate back/forth",
        best_choice: "Deque or two Stacks",
        why: "O(1) add/remove at both ends, natural for undo/redo",
        avoid: "ArrayList (shifting overhead), LinkedList (poor locality for iteration)",
    },
    UseCaseScenario {
        scenario: "Graph connectivity queries",
        requirements: "Check if nodes connected, merge components",
        best_choice: "Disjoint Set (Union-Find)",
        why: "Nearly O(1) find and union, optimal for dynamic connectivity",
        avoid: "DFS/BFS each query O(V+E), adjacency matrix O(V²) space",
    },
    UseCaseScenario {
        scenario: "Database index",
        requirements: "Sorted access, range queries, disk-based",
        best_choice: "B-Tree or B+Tree",
        why: "Minimizes disk I/O, shallow tree, sorted order, efficient range scans",
        avoid: "Binary tree (too deep), hash table (no ordering/ranges)",
    },
    UseCaseScenario {
        scenario: "Frequency counting",
        requirements: "Count occurrences of items",
        best_choice: "Hash Map (item → count)",
        why: "O(1) average increment/lookup, flexible for any type",
        avoid: "Array (if items aren't small integers), TreeMap (slower)",
    },
    UseCaseScenario {
        scenario: "Sorted unique elements with fast access",
        requirements: "Maintain sorted order, no duplicates, fast operations",
        best_choice: "TreeSet (Red-Black Tree)",
        why: "O(log n) insert/delete/search, maintains order, no duplicates",
        avoid: "HashSet (no order), sorted array (O(n) insert)",
    },
    UseCaseScenario {
        scenario: "Graph with frequent edge checks",
        requirements: "Often check if edge exists between vertices",
        best_choice: "Adjacency Matrix (if dense) or Hash-based Adjacency List",
        why: "Matrix: O(1) edge check. Hash: O(1) average if using HashMap<Vertex, Set<Vertex>>",
        avoid: "Simple adjacency list with array/linked list (O(degree) check)",
    },
    UseCaseScenario {
        scenario: "Real-time leaderboard",
        requirements: "Frequent score updates, rank queries, top-k retrieval",
        best_choice: "Skip List or TreeMap with count tracking",
        why: "O(log n) insert/delete/rank, naturally sorted, efficient range queries",
        avoid: "Array (O(n) insert/sort), HashMap (no ordering), heap (no rank queries)",
    },
    UseCaseScenario {
        scenario: "IP address routing table",
        requirements: "Longest prefix match, efficient lookup, memory efficient",
        best_choice: "Trie (Radix Tree/Patricia Trie)",
        why: "O(m) lookup where m=address length, prefix matching natural, compressed trie saves space",
        avoid: "Hash table (no prefix matching), binary search (slower for prefixes)",
    },
    UseCaseScenario {
        scenario: "Spell checker / autocomplete",
        requirements: "Prefix matching, dictionary storage, suggestions",
        best_choice: "Trie (Prefix Tree)",
        why: "O(m) prefix search, all words with prefix efficiently retrieved, natural for dictionaries",
        avoid: "Hash table (can't do prefixes), sorted array (slower prefix enumeration)",
    },
    UseCaseScenario {
        scenario: "In-memory time-series database",
        requirements: "Range queries by time, aggregations, recent data access",
        best_choice: "Segment Tree or Fenwick Tree + Circular Buffer",
        why: "O(log n) range queries, efficient updates, circular buffer for windowing",
        avoid: "Simple array (O(n) range scan), linked list (poor locality)",
    },
    UseCaseScenario {
        scenario: "Web crawler URL deduplication",
        requirements: "Billions of URLs, memory constrained, duplicates not critical",
        best_choice: "Bloom Filter",
        why: "Constant memory regardless of URLs, O(k) lookup, false positives acceptable (just re-crawl)",
        avoid: "HashSet (too much memory for billions), database (too slow)",
    },
    UseCaseScenario {
        scenario: "Game spatial collision detection",
        requirements: "2D/3D objects, range queries, moving objects",
        best_choice: "Quadtree (2D) or Octree (3D)",
        why: "Spatial partitioning, O(log n) region queries, dynamic updates",
        avoid: "Brute force O(n²), static grid (poor for non-uniform distribution)",
    },
    UseCaseScenario {
        scenario: "Expression evaluation (calculator)",
        requirements: "Parse infix notation, handle parentheses, operator precedence",
        best_choice: "Stack (for operators and operands)",
        why: "Natural LIFO for operator precedence and parentheses matching",
        avoid: "Queue (wrong order), recursion (stack overflow risk for deep expressions)",
    },
    UseCaseScenario {
        scenario: "Browser back/forward navigation",
        requirements: "Navigate history, add new pages, go back/forward",
        best_choice: "Two Stacks (back and forward)",
        why: "O(1) push/pop, natural for undo/redo pattern",
        avoid: "Array (O(n) for position tracking), single stack (can't do forward)",
    },
    UseCaseScenario {
        scenario: "Social network friend suggestions",
        requirements: "Find common friends, graph connectivity, recommend connections",
        best_choice: "Adjacency List + BFS/DFS",
        why: "Sparse graph structure, O(V+E) traversal, efficient neighbor iteration",
        avoid: "Adjacency matrix (too much memory for millions of users)",
    },
    UseCaseScenario {
        scenario: "Unique visitors per day (analytics)",
        requirements: "Count distinct IPs/users, massive scale, approximate OK",
        best_choice: "HyperLogLog",
        why: "Fixed small memory (~1KB for billions of users), <2% error, O(1) add/count",
        avoid: "HashSet (too much memory), exact counting (unnecessary for analytics)",
    },
    UseCaseScenario {
        scenario: "Database query result caching",
        requirements: "Cache frequently accessed queries, evict old/unused, size limit",
        best_choice: "LRU Cache (LinkedHashMap)",
        why: "O(1) access and eviction, automatic removal of least recently used",
        avoid: "Simple HashMap (no eviction), FIFO (doesn't consider frequency)",
    },
    UseCaseScenario {
        scenario: "Network packet buffering",
        requirements: "Fixed buffer size, FIFO, overwrite old packets if full",
        best_choice: "Circular Buffer (Ring Buffer)",
        why: "O(1) operations, fixed memory, automatic overwrite, excellent for streaming",
        avoid: "Queue with resizing (memory spikes), linked list (poor cache locality)",
    },
    UseCaseScenario {
        scenario: "File system directory structure",
        requirements: "Hierarchical organization, path traversal, nested folders",
        best_choice: "Tree (general tree, not binary)",
        why: "Natural hierarchy, O(depth) path traversal, variable children per node",
        avoid: "Flat structure (no hierarchy), binary tree (limited children)",
    },
    UseCaseScenario {
        scenario: "Collaborative text editor (real-time)",
        requirements: "Concurrent edits, conflict resolution, insertion tracking",
        best_choice: "Rope or CRDT (Conflict-free Replicated Data Type)",
        why: "Efficient inserts/deletes, handles concurrent modifications, maintains consistency",
        avoid: "Simple string (O(n) inserts), array (poor for distributed edits)",
    },
    UseCaseScenario {
        scenario: "Huffman encoding (compression)",
        requirements: "Build frequency tree, extract min twice repeatedly",
        best_choice: "Min-Heap (Priority Queue)",
        why: "O(log n) extract-min, O(log n) insert, perfect for building Huffman tree",
        avoid: "Sorted array (O(n) insert), unsorted array (O(n) find min)",
    },
    UseCaseScenario {
        scenario: "Job scheduling with deadlines",
        requirements: "Process highest priority, dynamic priorities, deadline tracking",
        best_choice: "Priority Queue (Binary Heap) + TreeMap for deadlines",
        why: "O(log n) priority updates, O(1) get next job, O(log n) deadline checks",
        avoid: "Sorted array (O(n) insert), simple queue (no priority)",
    },
    UseCaseScenario {
        scenario: "Symbol table in compiler",
        requirements: "Variable lookup, nested scopes, fast insertion/deletion",
        best_choice: "Hash Map (per scope) with stack of scopes",
        why: "O(1) lookup, easy scope entry/exit with stack, efficient for typical code",
        avoid: "Single global map (scope conflicts), tree (unnecessary ordering)",
    },
    UseCaseScenario {
        scenario: "Finding connected components in network",
        requirements: "Determine if nodes connected, merge components, dynamic updates",
        best_choice: "Disjoint Set (Union-Find)",
        why: "Nearly O(1) find and union, optimal for connectivity, simple implementation",
        avoid: "DFS each query O(V+E), storing all edges explicitly",
    },
    UseCaseScenario {
        scenario: "Median maintenance in stream",
        requirements: "Insert numbers continuously, query median anytime",
        best_choice: "Two Heaps (max-heap for lower half, min-heap for upper half)",
        why: "O(log n) insert, O(1) median retrieval, balanced partition",
        avoid: "Sorting each time O(n log n), single heap (can't get median efficiently)",
    },
];
