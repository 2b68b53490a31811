use super::records::ComplexityClass;

pub(super) const COMPLEXITY_RECORDS: &[ComplexityClass] = &[
    ComplexityClass {
        notation: "O(1)",
        name: "Constant",
        description: "Operation takes same time regardless of input size",
        examples: "Array access by index, hash table lookup (average), stack push/pop",
    },
    ComplexityClass {
        notation: "O(log n)",
        name: "Logarithmic",
        description: "Time grows logarithmically with input size. Typically from dividing problem in half repeatedly",
        examples: "Binary search, balanced tree operations, heap insert/delete",
    },
    ComplexityClass {
        notation: "O(n)",
        name: "Linear",
        description: "Time grows linearly with input size. Must examine each element once",
        examples: "Array scan, linked list traversal, linear search",
    },
    ComplexityClass {
        notation: "O(n log n)",
        name: "Linearithmic",
        description: "Common for efficient sorting algorithms",
        examples: "Merge sort, heap sort, quick sort (average)",
    },
    ComplexityClass {
        notation: "O(n²)",
        name: "Quadratic",
        description: "Time grows quadratically, typically from nested loops over input",
        examples: "Bubble sort, selection sort, naive string matching, adjacency matrix for all edges",
    },
    ComplexityClass {
        notation: "O(2ⁿ)",
        name: "Exponential",
        description: "Time doubles with each additional input element",
        examples: "Recursive fibonacci (naive), generating all subsets, traveling salesman (brute force)",
    },
    ComplexityClass {
        notation: "Amortized O(1)",
        name: "Amortized Constant",
        description: "Average time per operation over sequence of operations is constant, though individual ops may be expensive",
        examples: "Dynamic array append, stack push, disjoint set operations",
    },
    ComplexityClass {
        notation: "O(α(n))",
        name: "Inverse Ackermann",
        description: "Extremely slow-growing function, effectively constant for all practical purposes",
        examples: "Disjoint set union/find with path compression and union by rank",
    },
    ComplexityClass {
        notation: "O(k)",
        name: "Dependent on parameter",
        description: "Time depends on parameter k (e.g., number of hash functions, string length)",
        examples: "Bloom filter operations (k hash functions), trie operations (k = key length)",
    },
];
