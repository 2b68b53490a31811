use super::records::Operation;

pub(super) const OPERATION_RECORDS: &[Operation] = &[
    Operation {
        operation: "Access by index",
        meaning: "Time to retrieve element at specific numeric index position",
        example: "array[5], list.get(5)",
    },
    Operation {
        operation: "Access front",
        meaning: "Time to access first element",
        example: "array[0], list.getFirst(), deque.peekFirst()",
    },
    Operation {
        operation: "Access back",
        meaning: "Time to access last element",
        example: "array[n-1], list.getLast(), deque.peekLast()",
    },
    Operation {
        operation: "Insert front",
        meaning: "Time to insert element at beginning",
        example: "list.addFirst(), deque.addFirst()",
    },
    Operation {
        operation: "Insert middle",
        meaning: "Time to insert at arbitrary position (average case for position lookup + insertion)",
        example: "list.add(index, element), array insert requires shifting",
    },
    Operation {
        operation: "Insert back",
        meaning: "Time to append element at end",
        example: "list.add(element), array.push(), vector.push_back()",
    },
    Operation {
        operation: "Delete front",
        meaning: "Time to remove first element",
        example: "list.removeFirst(), deque.pollFirst()",
    },
    Operation {
        operation: "Delete middle",
        meaning: "Time to delete element at arbitrary position or by value",
        example: "list.remove(index), array deletion requires shifting",
    },
    Operation {
        operation: "Delete back",
        meaning: "Time to remove last element",
        example: "list.removeLast(), array.pop(), vector.pop_back()",
    },
    Operation {
        operation: "Search unsorted",
        meaning: "Time to find element by value in unordered collection",
        example: "Linear scan through array/list",
    },
    Operation {
        operation: "Search sorted",
        meaning: "Time to find element in sorted collection",
        example: "Binary search on sorted array, TreeSet.contains()",
    },
    Operation {
        operation: "Memory locality",
        meaning: "Cache-friendliness. 'Excellent' = contiguous (arrays), 'Poor' = scattered (linked structures)",
        example: "Arrays have excellent locality; linked lists have poor locality",
    },
    Operation {
        operation: "Memory overhead",
        meaning: "Extra memory beyond element storage (pointers, metadata, empty buckets, etc.)",
        example: "Array: minimal; LinkedList: 2 pointers per node; HashMap: buckets + load factor",
    },
];
