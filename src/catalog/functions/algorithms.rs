//! Algorithms from `<algorithm>` and `<numeric>`, grouped by category.

use crate::catalog::entry::{Entry, Standard};

pub(super) const ALGORITHM_ENTRIES: &[Entry] = &[
    Entry {
        name: "std::all_of",
        container: None,
        header: "<algorithm>",
        category: "Non-modifying",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "InputIt first, InputIt last, UnaryPredicate p",
        arg_explanation: "first, last: input range; p: unary predicate function",
        return_type: "bool",
        description: "Checks if all elements satisfy predicate",
        when_to_use: "Validate all elements meet condition; early termination on first false",
        when_not_to_use: "Need count of matches; checking empty ranges",
        real_world_freq: 5,
        competitive_freq: 8,
        example: "bool all_pos = std::all_of(v.begin(), v.end(), [](int x){ return x > 0; });",
        notes: Some("Returns true for empty range; short-circuits"),
        since: Standard::Cpp11,
        related: "any_of, none_of",
    },
    Entry {
        name: "std::any_of",
        container: None,
        header: "<algorithm>",
        category: "Non-modifying",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "InputIt first, InputIt last, UnaryPredicate p",
        arg_explanation: "first, last: input range; p: unary predicate function",
        return_type: "bool",
        description: "Checks if at least one element satisfies predicate",
        when_to_use: "Existence check; early termination on first match",
        when_not_to_use: "Need all matches; get iterator to match (use find_if)",
        real_world_freq: 6,
        competitive_freq: 8,
        example: "bool has_even = std::any_of(v.begin(), v.end(), [](int x){ return x % 2 == 0; });",
        notes: Some("Returns false for empty range; short-circuits"),
        since: Standard::Cpp11,
        related: "all_of, none_of, find_if",
    },
    Entry {
        name: "std::none_of",
        container: None,
        header: "<algorithm>",
        category: "Non-modifying",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "InputIt first, InputIt last, UnaryPredicate p",
        arg_explanation: "first, last: input range; p: unary predicate function",
        return_type: "bool",
        description: "Checks if no elements satisfy predicate",
        when_to_use: "Verify condition never occurs; validation",
        when_not_to_use: "Need to know which elements match",
        real_world_freq: 4,
        competitive_freq: 6,
        example: "bool no_neg = std::none_of(v.begin(), v.end(), [](int x){ return x < 0; });",
        notes: Some("Equivalent to !any_of; returns true for empty range"),
        since: Standard::Cpp11,
        related: "all_of, any_of",
    },
    Entry {
        name: "std::for_each",
        container: None,
        header: "<algorithm>",
        category: "Non-modifying",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "InputIt first, InputIt last, UnaryFunction f",
        arg_explanation: "first, last: input range; f: function to apply to each element",
        return_type: "UnaryFunction",
        description: "Applies function to each element in range",
        when_to_use: "Side effects on each element; custom iteration logic",
        when_not_to_use: "Modern C++ prefers range-for; pure transformation (use transform)",
        real_world_freq: 7,
        competitive_freq: 4,
        example: "std::for_each(v.begin(), v.end(), [](int& x){ std::cout << x << ' '; });",
        notes: Some("Can modify if function takes reference parameter"),
        since: Standard::Cpp98,
        related: "range-for, transform",
    },
    Entry {
        name: "std::for_each_n",
        container: None,
        header: "<algorithm>",
        category: "Non-modifying",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "InputIt first, Size n, UnaryFunction f",
        arg_explanation: "first: start iterator; n: number of elements; f: function to apply",
        return_type: "InputIt",
        description: "Applies function to first n elements",
        when_to_use: "Process specific number of elements; early termination",
        when_not_to_use: "Process entire range (use for_each); conditional (use find_if)",
        real_world_freq: 3,
        competitive_freq: 2,
        example: "std::for_each_n(v.begin(), 5, [](int x){ std::cout << x; });",
        notes: Some("Returns iterator past last processed element"),
        since: Standard::Cpp17,
        related: "for_each",
    },
    Entry {
        name: "std::count",
        container: None,
        header: "<algorithm>",
        category: "Non-modifying",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "InputIt first, InputIt last, const T& value",
        arg_explanation: "first, last: input range; value: value to count",
        return_type: "iterator_traits<InputIt>::difference_type",
        description: "Counts occurrences of value in range",
        when_to_use: "Simple value frequency; specific element count",
        when_not_to_use: "All frequencies (use map); conditional count (use count_if)",
        real_world_freq: 6,
        competitive_freq: 7,
        example: "int cnt = std::count(v.begin(), v.end(), 42);",
        notes: Some("Linear complexity; sorted ranges can use binary search"),
        since: Standard::Cpp98,
        related: "count_if, find",
    },
    Entry {
        name: "std::count_if",
        container: None,
        header: "<algorithm>",
        category: "Non-modifying",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "InputIt first, InputIt last, UnaryPredicate p",
        arg_explanation: "first, last: input range; p: predicate function",
        return_type: "iterator_traits<InputIt>::difference_type",
        description: "Counts elements satisfying predicate",
        when_to_use: "Conditional counting; complex filtering criteria",
        when_not_to_use: "Simple value count (use count); all elements",
        real_world_freq: 7,
        competitive_freq: 9,
        example: "int pos = std::count_if(v.begin(), v.end(), [](int x){ return x > 0; });",
        notes: Some("Very common in DSA; works well with lambdas"),
        since: Standard::Cpp98,
        related: "count, find_if",
    },
    Entry {
        name: "std::mismatch",
        container: None,
        header: "<algorithm>",
        category: "Non-modifying",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "InputIt1 first1, InputIt1 last1, InputIt2 first2",
        arg_explanation: "first1, last1: first range; first2: start of second range",
        return_type: "pair<InputIt1, InputIt2>",
        description: "Finds first position where two ranges differ",
        when_to_use: "Compare sequences; find divergence point",
        when_not_to_use: "Full equality check (use equal); single value search",
        real_world_freq: 3,
        competitive_freq: 4,
        example: "auto [it1, it2] = std::mismatch(v1.begin(), v1.end(), v2.begin());",
        notes: Some("Returns iterators to first mismatch or end"),
        since: Standard::Cpp98,
        related: "equal, find",
    },
    Entry {
        name: "std::find",
        container: None,
        header: "<algorithm>",
        category: "Non-modifying",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "InputIt first, InputIt last, const T& value",
        arg_explanation: "first, last: input range; value: value to find",
        return_type: "InputIt",
        description: "Finds first occurrence of value",
        when_to_use: "Linear search; unsorted containers; check existence",
        when_not_to_use: "Sorted range (use binary_search, lower_bound); conditional find (use find_if)",
        real_world_freq: 9,
        competitive_freq: 9,
        example: "auto it = std::find(v.begin(), v.end(), 42); if(it != v.end()) {...}",
        notes: Some("Most common search; returns end() if not found"),
        since: Standard::Cpp98,
        related: "find_if, binary_search",
    },
    Entry {
        name: "std::find_if",
        container: None,
        header: "<algorithm>",
        category: "Non-modifying",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "InputIt first, InputIt last, UnaryPredicate p",
        arg_explanation: "first, last: input range; p: predicate function",
        return_type: "InputIt",
        description: "Finds first element satisfying predicate",
        when_to_use: "Conditional search; complex criteria; custom matching",
        when_not_to_use: "Simple value search (use find); sorted binary search",
        real_world_freq: 9,
        competitive_freq: 10,
        example: "auto it = std::find_if(v.begin(), v.end(), [](int x){ return x > 10; });",
        notes: Some("Extremely common in DSA; essential for filtering"),
        since: Standard::Cpp98,
        related: "find, find_if_not",
    },
    Entry {
        name: "std::find_if_not",
        container: None,
        header: "<algorithm>",
        category: "Non-modifying",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "InputIt first, InputIt last, UnaryPredicate p",
        arg_explanation: "first, last: input range; p: predicate function",
        return_type: "InputIt",
        description: "Finds first element NOT satisfying predicate",
        when_to_use: "Find exception to rule; inverse condition",
        when_not_to_use: "Can negate predicate in find_if; simple case",
        real_world_freq: 3,
        competitive_freq: 4,
        example: "auto it = std::find_if_not(v.begin(), v.end(), [](int x){ return x > 0; });",
        notes: Some("Equivalent to find_if with negated predicate"),
        since: Standard::Cpp11,
        related: "find_if",
    },
    Entry {
        name: "std::find_end",
        container: None,
        header: "<algorithm>",
        category: "Non-modifying",
        time_complexity: "O(n*m)",
        space_complexity: "O(1)",
        arguments: "ForwardIt1 first1, ForwardIt1 last1, ForwardIt2 first2, ForwardIt2 last2",
        arg_explanation: "first1/last1: range to search in; first2/last2: subsequence to find",
        return_type: "ForwardIt1",
        description: "Finds last occurrence of subsequence",
        when_to_use: "Find last match of pattern; reverse search",
        when_not_to_use: "First occurrence (use search); single element (use find)",
        real_world_freq: 2,
        competitive_freq: 3,
        example: "auto it = std::find_end(text.begin(), text.end(), pattern.begin(), pattern.end());",
        notes: Some("Returns position of last occurrence or end()"),
        since: Standard::Cpp98,
        related: "search, find_first_of",
    },
    Entry {
        name: "std::find_first_of",
        container: None,
        header: "<algorithm>",
        category: "Non-modifying",
        time_complexity: "O(n*m)",
        space_complexity: "O(1)",
        arguments: "InputIt1 first1, InputIt1 last1, ForwardIt2 first2, ForwardIt2 last2",
        arg_explanation: "first1/last1: range to search; first2/last2: values to search for",
        return_type: "InputIt1",
        description: "Finds first occurrence of any element from second range",
        when_to_use: "Find any of multiple values; character set matching",
        when_not_to_use: "Single value (use find); set membership better with set",
        real_world_freq: 4,
        competitive_freq: 5,
        example: "auto it = std::find_first_of(str.begin(), str.end(), vowels.begin(), vowels.end());",
        notes: Some("Useful for string parsing; can be slow for large search sets"),
        since: Standard::Cpp98,
        related: "find, search",
    },
    Entry {
        name: "std::adjacent_find",
        container: None,
        header: "<algorithm>",
        category: "Non-modifying",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "ForwardIt first, ForwardIt last, BinaryPredicate p",
        arg_explanation: "first, last: input range; p: optional binary predicate",
        return_type: "ForwardIt",
        description: "Finds first pair of adjacent equal elements",
        when_to_use: "Find consecutive duplicates; detect runs",
        when_not_to_use: "Non-adjacent duplicates; all duplicates",
        real_world_freq: 4,
        competitive_freq: 6,
        example: "auto it = std::adjacent_find(v.begin(), v.end());",
        notes: Some("Returns iterator to first of the pair"),
        since: Standard::Cpp98,
        related: "unique, find",
    },
    Entry {
        name: "std::sort",
        container: None,
        header: "<algorithm>",
        category: "Sorting",
        time_complexity: "O(n log n)",
        space_complexity: "O(log n)",
        arguments: "RandomIt first, RandomIt last, Compare comp",
        arg_explanation: "first, last: range to sort; comp: optional comparison function",
        return_type: "void",
        description: "Sorts elements in ascending order (or by custom comparator)",
        when_to_use: "General sorting; most common sort; unstable sort OK",
        when_not_to_use: "Need stability (use stable_sort); partially sorted (use partial_sort); linked lists",
        real_world_freq: 10,
        competitive_freq: 10,
        example: "std::sort(v.begin(), v.end()); // or with lambda: std::sort(v.begin(), v.end(), [](int a, int b){ return a > b; });",
        notes: Some("Usually IntroSort (QuickSort + HeapSort + InsertionSort); unstable; most used algorithm"),
        since: Standard::Cpp98,
        related: "stable_sort, partial_sort, nth_element",
    },
    Entry {
        name: "std::stable_sort",
        container: None,
        header: "<algorithm>",
        category: "Sorting",
        time_complexity: "O(n log n)",
        space_complexity: "O(n)",
        arguments: "RandomIt first, RandomIt last, Compare comp",
        arg_explanation: "first, last: range to sort; comp: optional comparison function",
        return_type: "void",
        description: "Sorts while preserving relative order of equal elements",
        when_to_use: "Need stability; multi-key sorting; preserve original order",
        when_not_to_use: "Stability not needed (use sort - faster); memory constrained",
        real_world_freq: 6,
        competitive_freq: 7,
        example: "std::stable_sort(people.begin(), people.end(), [](auto& a, auto& b){ return a.age < b.age; });",
        notes: Some("Usually MergeSort; requires extra memory; stable guarantee"),
        since: Standard::Cpp98,
        related: "sort, partial_sort",
    },
    Entry {
        name: "std::partial_sort",
        container: None,
        header: "<algorithm>",
        category: "Sorting",
        time_complexity: "O(n log k)",
        space_complexity: "O(1)",
        arguments: "RandomIt first, RandomIt middle, RandomIt last, Compare comp",
        arg_explanation: "first: start; middle: end of sorted portion; last: end; comp: optional comparator",
        return_type: "void",
        description: "Partially sorts so [first, middle) contains smallest elements sorted",
        when_to_use: "Top-k elements; only need first few sorted; k << n",
        when_not_to_use: "Need all elements sorted; k close to n (use sort)",
        real_world_freq: 5,
        competitive_freq: 8,
        example: "std::partial_sort(v.begin(), v.begin() + 10, v.end()); // sort first 10",
        notes: Some("More efficient than full sort when k << n; uses heap"),
        since: Standard::Cpp98,
        related: "nth_element, sort",
    },
    Entry {
        name: "std::nth_element",
        container: None,
        header: "<algorithm>",
        category: "Sorting",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "RandomIt first, RandomIt nth, RandomIt last, Compare comp",
        arg_explanation: "first, last: range; nth: position to partition around; comp: optional comparator",
        return_type: "void",
        description: "Partitions so nth element is in sorted position, smaller before, larger after",
        when_to_use: "Find median; k-th smallest; quick select; partition",
        when_not_to_use: "Need sorted order; multiple k-th elements",
        real_world_freq: 6,
        competitive_freq: 9,
        example: "std::nth_element(v.begin(), v.begin() + v.size()/2, v.end()); // median at middle",
        notes: Some("Average O(n); QuickSelect; unstable; very useful for percentiles"),
        since: Standard::Cpp98,
        related: "partial_sort, partition",
    },
    Entry {
        name: "std::is_sorted",
        container: None,
        header: "<algorithm>",
        category: "Sorting",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "ForwardIt first, ForwardIt last, Compare comp",
        arg_explanation: "first, last: range to check; comp: optional comparison function",
        return_type: "bool",
        description: "Checks if range is sorted",
        when_to_use: "Validate sorted invariant; optimization check",
        when_not_to_use: "Need to know where unsorted; frequently checking",
        real_world_freq: 4,
        competitive_freq: 6,
        example: "if (std::is_sorted(v.begin(), v.end())) { /* use binary search */ }",
        notes: Some("Useful for assertions and optimizations"),
        since: Standard::Cpp11,
        related: "is_sorted_until",
    },
    Entry {
        name: "std::is_sorted_until",
        container: None,
        header: "<algorithm>",
        category: "Sorting",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "ForwardIt first, ForwardIt last, Compare comp",
        arg_explanation: "first, last: range; comp: optional comparison function",
        return_type: "ForwardIt",
        description: "Finds first position where range is no longer sorted",
        when_to_use: "Find where sorting breaks; partial sort validation",
        when_not_to_use: "Just need boolean (use is_sorted); don't need position",
        real_world_freq: 2,
        competitive_freq: 3,
        example: "auto it = std::is_sorted_until(v.begin(), v.end());",
        notes: Some("Returns iterator to first out-of-order element or end()"),
        since: Standard::Cpp11,
        related: "is_sorted",
    },
    Entry {
        name: "std::binary_search",
        container: None,
        header: "<algorithm>",
        category: "Binary Search",
        time_complexity: "O(log n)",
        space_complexity: "O(1)",
        arguments: "ForwardIt first, ForwardIt last, const T& value, Compare comp",
        arg_explanation: "first, last: SORTED range; value: value to find; comp: optional comparator",
        return_type: "bool",
        description: "Checks if value exists in sorted range",
        when_to_use: "Existence check in sorted data; fast membership test",
        when_not_to_use: "Unsorted data; need iterator to element (use lower_bound); need count",
        real_world_freq: 7,
        competitive_freq: 9,
        example: "bool found = std::binary_search(v.begin(), v.end(), 42);",
        notes: Some("REQUIRES sorted range; only returns bool; use lower_bound for iterator"),
        since: Standard::Cpp98,
        related: "lower_bound, upper_bound, equal_range",
    },
    Entry {
        name: "std::lower_bound",
        container: None,
        header: "<algorithm>",
        category: "Binary Search",
        time_complexity: "O(log n)",
        space_complexity: "O(1)",
        arguments: "ForwardIt first, ForwardIt last, const T& value, Compare comp",
        arg_explanation: "first, last: SORTED range; value: value to find; comp: optional comparator",
        return_type: "ForwardIt",
        description: "Finds first element not less than value (>=)",
        when_to_use: "Find insertion point; first >= value; range queries",
        when_not_to_use: "Unsorted data; just existence check (use binary_search)",
        real_world_freq: 8,
        competitive_freq: 10,
        example: "auto it = std::lower_bound(v.begin(), v.end(), 42); // first element >= 42",
        notes: Some("ESSENTIAL for DSA; returns end() if all < value; insertion point"),
        since: Standard::Cpp98,
        related: "upper_bound, equal_range, binary_search",
    },
    Entry {
        name: "std::upper_bound",
        container: None,
        header: "<algorithm>",
        category: "Binary Search",
        time_complexity: "O(log n)",
        space_complexity: "O(1)",
        arguments: "ForwardIt first, ForwardIt last, const T& value, Compare comp",
        arg_explanation: "first, last: SORTED range; value: value to find; comp: optional comparator",
        return_type: "ForwardIt",
        description: "Finds first element greater than value (>)",
        when_to_use: "Find insertion point after value; first > value; range queries",
        when_not_to_use: "Unsorted data; need >= (use lower_bound)",
        real_world_freq: 7,
        competitive_freq: 10,
        example: "auto it = std::upper_bound(v.begin(), v.end(), 42); // first element > 42",
        notes: Some("Combined with lower_bound gives range of equal elements"),
        since: Standard::Cpp98,
        related: "lower_bound, equal_range",
    },
    Entry {
        name: "std::equal_range",
        container: None,
        header: "<algorithm>",
        category: "Binary Search",
        time_complexity: "O(log n)",
        space_complexity: "O(1)",
        arguments: "ForwardIt first, ForwardIt last, const T& value, Compare comp",
        arg_explanation: "first, last: SORTED range; value: value to find; comp: optional comparator",
        return_type: "pair<ForwardIt, ForwardIt>",
        description: "Returns range [lower_bound, upper_bound) of equal elements",
        when_to_use: "Find all occurrences of value; range of equals",
        when_not_to_use: "Just existence; single occurrence expected",
        real_world_freq: 5,
        competitive_freq: 7,
        example: "auto [first, last] = std::equal_range(v.begin(), v.end(), 42);",
        notes: Some("Equivalent to {lower_bound, upper_bound}; useful for counting"),
        since: Standard::Cpp98,
        related: "lower_bound, upper_bound",
    },
    Entry {
        name: "std::copy",
        container: None,
        header: "<algorithm>",
        category: "Modifying",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "InputIt first, InputIt last, OutputIt d_first",
        arg_explanation: "first, last: source range; d_first: destination start",
        return_type: "OutputIt",
        description: "Copies elements from source to destination",
        when_to_use: "Copy range to another container; clone data",
        when_not_to_use: "Overlapping ranges (use copy_backward); transformation needed (use transform)",
        real_world_freq: 8,
        competitive_freq: 6,
        example: "std::copy(src.begin(), src.end(), dest.begin());",
        notes: Some("Destination must have space; returns iterator past last copied"),
        since: Standard::Cpp98,
        related: "copy_if, copy_n, copy_backward",
    },
    Entry {
        name: "std::copy_if",
        container: None,
        header: "<algorithm>",
        category: "Modifying",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "InputIt first, InputIt last, OutputIt d_first, UnaryPredicate p",
        arg_explanation: "first, last: source; d_first: destination; p: predicate for filtering",
        return_type: "OutputIt",
        description: "Copies elements satisfying predicate",
        when_to_use: "Filtered copy; conditional data transfer",
        when_not_to_use: "All elements (use copy); in-place filtering (use remove_if)",
        real_world_freq: 7,
        competitive_freq: 8,
        example: "std::copy_if(src.begin(), src.end(), std::back_inserter(dest), [](int x){ return x > 0; });",
        notes: Some("Very useful with back_inserter; common in filtering"),
        since: Standard::Cpp11,
        related: "copy, remove_copy_if",
    },
    Entry {
        name: "std::copy_n",
        container: None,
        header: "<algorithm>",
        category: "Modifying",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "InputIt first, Size count, OutputIt d_first",
        arg_explanation: "first: source start; count: number of elements; d_first: destination",
        return_type: "OutputIt",
        description: "Copies exactly n elements",
        when_to_use: "Copy specific count; array-like copying",
        when_not_to_use: "Copy entire range (use copy); conditional copy",
        real_world_freq: 4,
        competitive_freq: 4,
        example: "std::copy_n(src.begin(), 10, dest.begin());",
        notes: Some("Doesn't check bounds; efficient for fixed counts"),
        since: Standard::Cpp11,
        related: "copy",
    },
    Entry {
        name: "std::fill",
        container: None,
        header: "<algorithm>",
        category: "Modifying",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "ForwardIt first, ForwardIt last, const T& value",
        arg_explanation: "first, last: range to fill; value: value to assign",
        return_type: "void",
        description: "Assigns value to all elements in range",
        when_to_use: "Initialize range; reset values; set all to same value",
        when_not_to_use: "Need different values (use generate); construction (use vector constructor)",
        real_world_freq: 7,
        competitive_freq: 7,
        example: "std::fill(v.begin(), v.end(), 0); // set all to 0",
        notes: Some("Common for initialization; simple and clear"),
        since: Standard::Cpp98,
        related: "fill_n, generate",
    },
    Entry {
        name: "std::fill_n",
        container: None,
        header: "<algorithm>",
        category: "Modifying",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "OutputIt first, Size count, const T& value",
        arg_explanation: "first: start position; count: number of elements; value: value to assign",
        return_type: "OutputIt",
        description: "Assigns value to first n elements",
        when_to_use: "Fill specific count; array initialization",
        when_not_to_use: "Fill entire range (use fill); different values per element",
        real_world_freq: 5,
        competitive_freq: 5,
        example: "std::fill_n(v.begin(), 10, -1); // first 10 elements to -1",
        notes: Some("Returns iterator past last filled element"),
        since: Standard::Cpp98,
        related: "fill",
    },
    Entry {
        name: "std::transform",
        container: None,
        header: "<algorithm>",
        category: "Modifying",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "InputIt first, InputIt last, OutputIt d_first, UnaryOp op",
        arg_explanation: "first, last: source; d_first: destination; op: transformation function",
        return_type: "OutputIt",
        description: "Applies function to range and stores result",
        when_to_use: "Map operation; element-wise transformation; functional programming",
        when_not_to_use: "No transformation (use copy); in-place with same type (can use transform with same it)",
        real_world_freq: 8,
        competitive_freq: 8,
        example: "std::transform(v.begin(), v.end(), v.begin(), [](int x){ return x * 2; });",
        notes: Some("Can transform in-place; binary version for two inputs"),
        since: Standard::Cpp98,
        related: "for_each, copy",
    },
    Entry {
        name: "std::generate",
        container: None,
        header: "<algorithm>",
        category: "Modifying",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "ForwardIt first, ForwardIt last, Generator g",
        arg_explanation: "first, last: range; g: generator function (no args, returns value)",
        return_type: "void",
        description: "Assigns values generated by function",
        when_to_use: "Generate sequence; random values; computed values",
        when_not_to_use: "Same value for all (use fill); transformation of existing (use transform)",
        real_world_freq: 5,
        competitive_freq: 4,
        example: "std::generate(v.begin(), v.end(), std::rand);",
        notes: Some("Generator called once per element; useful for random/sequential data"),
        since: Standard::Cpp98,
        related: "generate_n, fill",
    },
    Entry {
        name: "std::remove",
        container: None,
        header: "<algorithm>",
        category: "Modifying",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "ForwardIt first, ForwardIt last, const T& value",
        arg_explanation: "first, last: range; value: value to remove",
        return_type: "ForwardIt",
        description: "Removes elements equal to value (moves to end)",
        when_to_use: "Remove specific value; erase-remove idiom",
        when_not_to_use: "Conditional removal (use remove_if); actually erase (combine with erase)",
        real_world_freq: 7,
        competitive_freq: 8,
        example: "v.erase(std::remove(v.begin(), v.end(), 42), v.end()); // erase-remove idiom",
        notes: Some("Doesn't actually erase; returns new logical end; use erase-remove idiom"),
        since: Standard::Cpp98,
        related: "remove_if, erase",
    },
    Entry {
        name: "std::remove_if",
        container: None,
        header: "<algorithm>",
        category: "Modifying",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "ForwardIt first, ForwardIt last, UnaryPredicate p",
        arg_explanation: "first, last: range; p: predicate for removal condition",
        return_type: "ForwardIt",
        description: "Removes elements satisfying predicate",
        when_to_use: "Conditional removal; filter out elements; erase-remove idiom",
        when_not_to_use: "Simple value (use remove); keep matching (invert predicate or use copy_if)",
        real_world_freq: 8,
        competitive_freq: 9,
        example: "v.erase(std::remove_if(v.begin(), v.end(), [](int x){ return x < 0; }), v.end());",
        notes: Some("VERY common in DSA; erase-remove idiom essential pattern"),
        since: Standard::Cpp98,
        related: "remove, erase, copy_if",
    },
    Entry {
        name: "std::unique",
        container: None,
        header: "<algorithm>",
        category: "Modifying",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "ForwardIt first, ForwardIt last, BinaryPredicate p",
        arg_explanation: "first, last: range (should be sorted); p: optional equality predicate",
        return_type: "ForwardIt",
        description: "Removes consecutive duplicate elements",
        when_to_use: "Remove adjacent duplicates; after sorting for all duplicates",
        when_not_to_use: "Need all unique (sort first); non-adjacent duplicates",
        real_world_freq: 7,
        competitive_freq: 8,
        example: "std::sort(v.begin(), v.end()); v.erase(std::unique(v.begin(), v.end()), v.end());",
        notes: Some("Only removes CONSECUTIVE duplicates; sort first for all duplicates"),
        since: Standard::Cpp98,
        related: "remove, sort",
    },
    Entry {
        name: "std::reverse",
        container: None,
        header: "<algorithm>",
        category: "Modifying",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "BidirectionalIt first, BidirectionalIt last",
        arg_explanation: "first, last: range to reverse",
        return_type: "void",
        description: "Reverses order of elements in range",
        when_to_use: "Reverse array/vector; palindrome check; reverse iteration order",
        when_not_to_use: "Temporary reverse iteration (use reverse_iterator); copy reversed (use reverse_copy)",
        real_world_freq: 7,
        competitive_freq: 8,
        example: "std::reverse(v.begin(), v.end());",
        notes: Some("In-place; O(1) space; bidirectional iterators required"),
        since: Standard::Cpp98,
        related: "reverse_copy, rotate",
    },
    Entry {
        name: "std::rotate",
        container: None,
        header: "<algorithm>",
        category: "Modifying",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "ForwardIt first, ForwardIt n_first, ForwardIt last",
        arg_explanation: "first: range start; n_first: new first element; last: range end",
        return_type: "ForwardIt",
        description: "Rotates elements so n_first becomes first",
        when_to_use: "Circular shift; move elements; rearrange",
        when_not_to_use: "Simple swap; sort (use sort)",
        real_world_freq: 4,
        competitive_freq: 6,
        example: "std::rotate(v.begin(), v.begin() + 3, v.end()); // [0,1,2,3,4] -> [3,4,0,1,2]",
        notes: Some("Useful for array rotation problems; O(1) space"),
        since: Standard::Cpp98,
        related: "reverse, swap_ranges",
    },
    Entry {
        name: "std::shuffle",
        container: None,
        header: "<algorithm>",
        category: "Modifying",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "RandomIt first, RandomIt last, URBG&& g",
        arg_explanation: "first, last: range; g: random number generator",
        return_type: "void",
        description: "Randomly reorders elements",
        when_to_use: "Randomize order; shuffle deck; random sampling",
        when_not_to_use: "Need specific permutation; deterministic reorder",
        real_world_freq: 5,
        competitive_freq: 4,
        example: "std::shuffle(v.begin(), v.end(), std::mt19937{std::random_device{}()});",
        notes: Some("Replaces deprecated random_shuffle; requires C++11 random generators"),
        since: Standard::Cpp11,
        related: "random_shuffle (deprecated)",
    },
    Entry {
        name: "std::make_heap",
        container: None,
        header: "<algorithm>",
        category: "Heap",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "RandomIt first, RandomIt last, Compare comp",
        arg_explanation: "first, last: range to heapify; comp: optional comparison function",
        return_type: "void",
        description: "Converts range into max heap",
        when_to_use: "Create heap from array; priority queue implementation",
        when_not_to_use: "Need container-based pq (use priority_queue); frequently changing",
        real_world_freq: 4,
        competitive_freq: 6,
        example: "std::make_heap(v.begin(), v.end());",
        notes: Some("Linear time construction; max heap by default"),
        since: Standard::Cpp98,
        related: "push_heap, pop_heap, priority_queue",
    },
    Entry {
        name: "std::push_heap",
        container: None,
        header: "<algorithm>",
        category: "Heap",
        time_complexity: "O(log n)",
        space_complexity: "O(1)",
        arguments: "RandomIt first, RandomIt last, Compare comp",
        arg_explanation: "first, last: heap range (last-1 is new element); comp: optional comparator",
        return_type: "void",
        description: "Inserts element at end into heap",
        when_to_use: "Add to existing heap; manual heap operations",
        when_not_to_use: "Use priority_queue for easier interface",
        real_world_freq: 3,
        competitive_freq: 5,
        example: "v.push_back(42); std::push_heap(v.begin(), v.end());",
        notes: Some("Element must be at end before calling; maintains heap property"),
        since: Standard::Cpp98,
        related: "make_heap, pop_heap",
    },
    Entry {
        name: "std::pop_heap",
        container: None,
        header: "<algorithm>",
        category: "Heap",
        time_complexity: "O(log n)",
        space_complexity: "O(1)",
        arguments: "RandomIt first, RandomIt last, Compare comp",
        arg_explanation: "first, last: heap range; comp: optional comparator",
        return_type: "void",
        description: "Moves largest element to end, maintains heap for rest",
        when_to_use: "Extract max from heap; manual heap operations",
        when_not_to_use: "Use priority_queue for easier interface",
        real_world_freq: 3,
        competitive_freq: 5,
        example: "std::pop_heap(v.begin(), v.end()); int max = v.back(); v.pop_back();",
        notes: Some("Max element moved to end; must manually remove it"),
        since: Standard::Cpp98,
        related: "push_heap, make_heap",
    },
    Entry {
        name: "std::sort_heap",
        container: None,
        header: "<algorithm>",
        category: "Heap",
        time_complexity: "O(n log n)",
        space_complexity: "O(1)",
        arguments: "RandomIt first, RandomIt last, Compare comp",
        arg_explanation: "first, last: heap range; comp: optional comparator",
        return_type: "void",
        description: "Converts heap to sorted range",
        when_to_use: "Heap sort; convert heap to sorted array",
        when_not_to_use: "Don't need sorted (keep as heap); use regular sort",
        real_world_freq: 2,
        competitive_freq: 3,
        example: "std::make_heap(v.begin(), v.end()); std::sort_heap(v.begin(), v.end());",
        notes: Some("Range is no longer a heap after; in-place heap sort"),
        since: Standard::Cpp98,
        related: "make_heap, sort",
    },
    Entry {
        name: "std::set_union",
        container: None,
        header: "<algorithm>",
        category: "Set Operations",
        time_complexity: "O(n + m)",
        space_complexity: "O(1)",
        arguments: "InputIt1 first1, InputIt1 last1, InputIt2 first2, InputIt2 last2, OutputIt d_first",
        arg_explanation: "first1/last1, first2/last2: two SORTED ranges; d_first: output destination",
        return_type: "OutputIt",
        description: "Computes union of two sorted ranges",
        when_to_use: "Merge sorted sets; combine unique elements",
        when_not_to_use: "Unsorted data; unordered_set better for sets",
        real_world_freq: 4,
        competitive_freq: 6,
        example: "std::set_union(v1.begin(), v1.end(), v2.begin(), v2.end(), std::back_inserter(result));",
        notes: Some("BOTH ranges must be sorted; includes duplicates based on max count"),
        since: Standard::Cpp98,
        related: "set_intersection, set_difference, merge",
    },
    Entry {
        name: "std::set_intersection",
        container: None,
        header: "<algorithm>",
        category: "Set Operations",
        time_complexity: "O(n + m)",
        space_complexity: "O(1)",
        arguments: "InputIt1 first1, InputIt1 last1, InputIt2 first2, InputIt2 last2, OutputIt d_first",
        arg_explanation: "first1/last1, first2/last2: two SORTED ranges; d_first: output",
        return_type: "OutputIt",
        description: "Computes intersection of two sorted ranges",
        when_to_use: "Find common elements; set intersection",
        when_not_to_use: "Unsorted data; hash set intersection easier",
        real_world_freq: 5,
        competitive_freq: 7,
        example: "std::set_intersection(v1.begin(), v1.end(), v2.begin(), v2.end(), std::back_inserter(result));",
        notes: Some("BOTH ranges must be sorted; common LeetCode pattern"),
        since: Standard::Cpp98,
        related: "set_union, set_difference",
    },
    Entry {
        name: "std::set_difference",
        container: None,
        header: "<algorithm>",
        category: "Set Operations",
        time_complexity: "O(n + m)",
        space_complexity: "O(1)",
        arguments: "InputIt1 first1, InputIt1 last1, InputIt2 first2, InputIt2 last2, OutputIt d_first",
        arg_explanation: "first1/last1, first2/last2: two SORTED ranges; d_first: output",
        return_type: "OutputIt",
        description: "Computes set difference (elements in first but not second)",
        when_to_use: "Find elements in A but not B; set subtraction",
        when_not_to_use: "Unsorted data; order doesn't matter",
        real_world_freq: 4,
        competitive_freq: 6,
        example: "std::set_difference(v1.begin(), v1.end(), v2.begin(), v2.end(), std::back_inserter(result));",
        notes: Some("BOTH ranges must be sorted; not symmetric"),
        since: Standard::Cpp98,
        related: "set_symmetric_difference",
    },
    Entry {
        name: "std::merge",
        container: None,
        header: "<algorithm>",
        category: "Set Operations",
        time_complexity: "O(n + m)",
        space_complexity: "O(1)",
        arguments: "InputIt1 first1, InputIt1 last1, InputIt2 first2, InputIt2 last2, OutputIt d_first",
        arg_explanation: "first1/last1, first2/last2: two SORTED ranges; d_first: output",
        return_type: "OutputIt",
        description: "Merges two sorted ranges into one sorted range",
        when_to_use: "Merge sort; combine sorted sequences; stable merge",
        when_not_to_use: "Unsorted data (sort first); in-place merge",
        real_world_freq: 6,
        competitive_freq: 8,
        example: "std::merge(v1.begin(), v1.end(), v2.begin(), v2.end(), std::back_inserter(result));",
        notes: Some("Essential for merge sort; stable; preserves duplicates"),
        since: Standard::Cpp98,
        related: "inplace_merge, set_union",
    },
    Entry {
        name: "std::includes",
        container: None,
        header: "<algorithm>",
        category: "Set Operations",
        time_complexity: "O(n + m)",
        space_complexity: "O(1)",
        arguments: "InputIt1 first1, InputIt1 last1, InputIt2 first2, InputIt2 last2",
        arg_explanation: "first1/last1: set to check; first2/last2: subset to find",
        return_type: "bool",
        description: "Checks if one sorted range is subset of another",
        when_to_use: "Subset verification; containment check",
        when_not_to_use: "Unsorted data; equality check (use equal)",
        real_world_freq: 3,
        competitive_freq: 5,
        example: "bool is_subset = std::includes(set.begin(), set.end(), subset.begin(), subset.end());",
        notes: Some("BOTH ranges must be sorted"),
        since: Standard::Cpp98,
        related: "set_intersection",
    },
    Entry {
        name: "std::max",
        container: None,
        header: "<algorithm>",
        category: "Min/Max",
        time_complexity: "O(1)",
        space_complexity: "O(1)",
        arguments: "const T& a, const T& b, Compare comp",
        arg_explanation: "a, b: values to compare; comp: optional comparator",
        return_type: "const T&",
        description: "Returns larger of two values",
        when_to_use: "Compare two values; simple maximum",
        when_not_to_use: "More than 2 values (use max with initializer_list); range (use max_element)",
        real_world_freq: 10,
        competitive_freq: 10,
        example: "int m = std::max(a, b); int m2 = std::max({1, 5, 3, 2}); // C++11",
        notes: Some("Extremely common; has initializer_list version in C++11"),
        since: Standard::Cpp98,
        related: "min, max_element, clamp",
    },
    Entry {
        name: "std::min",
        container: None,
        header: "<algorithm>",
        category: "Min/Max",
        time_complexity: "O(1)",
        space_complexity: "O(1)",
        arguments: "const T& a, const T& b, Compare comp",
        arg_explanation: "a, b: values to compare; comp: optional comparator",
        return_type: "const T&",
        description: "Returns smaller of two values",
        when_to_use: "Compare two values; simple minimum",
        when_not_to_use: "More than 2 values (use initializer_list version); range (use min_element)",
        real_world_freq: 10,
        competitive_freq: 10,
        example: "int m = std::min(a, b); int m2 = std::min({1, 5, 3, 2}); // C++11",
        notes: Some("Extremely common; has initializer_list version in C++11"),
        since: Standard::Cpp98,
        related: "max, min_element, clamp",
    },
    Entry {
        name: "std::minmax",
        container: None,
        header: "<algorithm>",
        category: "Min/Max",
        time_complexity: "O(1)",
        space_complexity: "O(1)",
        arguments: "const T& a, const T& b, Compare comp",
        arg_explanation: "a, b: values to compare; comp: optional comparator",
        return_type: "pair<const T&, const T&>",
        description: "Returns pair of min and max",
        when_to_use: "Need both min and max; single comparison",
        when_not_to_use: "Only need one; range (use minmax_element)",
        real_world_freq: 4,
        competitive_freq: 5,
        example: "auto [minimum, maximum] = std::minmax(a, b);",
        notes: Some("More efficient than calling min and max separately"),
        since: Standard::Cpp11,
        related: "min, max, minmax_element",
    },
    Entry {
        name: "std::max_element",
        container: None,
        header: "<algorithm>",
        category: "Min/Max",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "ForwardIt first, ForwardIt last, Compare comp",
        arg_explanation: "first, last: range to search; comp: optional comparator",
        return_type: "ForwardIt",
        description: "Finds iterator to largest element in range",
        when_to_use: "Find maximum in container; get max iterator",
        when_not_to_use: "Just need value (dereference result); two values (use max)",
        real_world_freq: 8,
        competitive_freq: 9,
        example: "auto it = std::max_element(v.begin(), v.end()); int max_val = *it;",
        notes: Some("Returns iterator, not value; very common in DSA"),
        since: Standard::Cpp98,
        related: "min_element, minmax_element",
    },
    Entry {
        name: "std::min_element",
        container: None,
        header: "<algorithm>",
        category: "Min/Max",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "ForwardIt first, ForwardIt last, Compare comp",
        arg_explanation: "first, last: range to search; comp: optional comparator",
        return_type: "ForwardIt",
        description: "Finds iterator to smallest element in range",
        when_to_use: "Find minimum in container; get min iterator",
        when_not_to_use: "Just need value (dereference result); two values (use min)",
        real_world_freq: 8,
        competitive_freq: 9,
        example: "auto it = std::min_element(v.begin(), v.end()); int min_val = *it;",
        notes: Some("Returns iterator, not value; very common in DSA"),
        since: Standard::Cpp98,
        related: "max_element, minmax_element",
    },
    Entry {
        name: "std::clamp",
        container: None,
        header: "<algorithm>",
        category: "Min/Max",
        time_complexity: "O(1)",
        space_complexity: "O(1)",
        arguments: "const T& v, const T& lo, const T& hi, Compare comp",
        arg_explanation: "v: value to clamp; lo: lower bound; hi: upper bound; comp: optional comparator",
        return_type: "const T&",
        description: "Clamps value between lower and upper bounds",
        when_to_use: "Bound value to range; sanitize input; constrain values",
        when_not_to_use: "Simple min/max; no bounds needed",
        real_world_freq: 6,
        competitive_freq: 5,
        example: "int clamped = std::clamp(value, 0, 100); // ensures 0 <= clamped <= 100",
        notes: Some("Very useful for bounds checking; added in C++17"),
        since: Standard::Cpp17,
        related: "min, max",
    },
    Entry {
        name: "std::next_permutation",
        container: None,
        header: "<algorithm>",
        category: "Permutation",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "BidirectionalIt first, BidirectionalIt last",
        arg_explanation: "first, last: range to permute",
        return_type: "bool",
        description: "Transforms range into next lexicographically greater permutation",
        when_to_use: "Generate all permutations; combinatorial problems",
        when_not_to_use: "Random permutation (use shuffle)",
        real_world_freq: 3,
        competitive_freq: 9,
        example: "do { process(v); } while (std::next_permutation(v.begin(), v.end()));",
        notes: Some("Essential for permutation problems; start with sorted range"),
        since: Standard::Cpp98,
        related: "prev_permutation",
    },
    Entry {
        name: "std::partition",
        container: None,
        header: "<algorithm>",
        category: "Partitioning",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "ForwardIt first, ForwardIt last, UnaryPredicate p",
        arg_explanation: "first, last: range; p: predicate",
        return_type: "ForwardIt",
        description: "Reorders so predicate-true elements come first",
        when_to_use: "Separate by condition; quick select",
        when_not_to_use: "Need stability (use stable_partition)",
        real_world_freq: 5,
        competitive_freq: 7,
        example: "auto mid = std::partition(v.begin(), v.end(), [](int x){ return x % 2 == 0; });",
        notes: Some("Unstable; used in quicksort/quickselect"),
        since: Standard::Cpp98,
        related: "stable_partition, nth_element",
    },
    Entry {
        name: "std::accumulate",
        container: None,
        header: "<numeric>",
        category: "Numeric",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "InputIt first, InputIt last, T init",
        arg_explanation: "first, last: range; init: initial value",
        return_type: "T",
        description: "Computes sum (or fold) of range",
        when_to_use: "Sum/product elements; fold operations",
        when_not_to_use: "Just counting (use distance)",
        real_world_freq: 9,
        competitive_freq: 9,
        example: "int sum = std::accumulate(v.begin(), v.end(), 0);",
        notes: Some("Most common aggregation; can use custom operation"),
        since: Standard::Cpp98,
        related: "reduce, transform_reduce",
    },
    Entry {
        name: "std::iota",
        container: None,
        header: "<numeric>",
        category: "Numeric",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        arguments: "ForwardIt first, ForwardIt last, T value",
        arg_explanation: "first, last: range; value: starting value",
        return_type: "void",
        description: "Fills range with sequentially increasing values",
        when_to_use: "Generate sequence 0,1,2...; index arrays",
        when_not_to_use: "Complex sequence (use generate)",
        real_world_freq: 5,
        competitive_freq: 7,
        example: "std::iota(v.begin(), v.end(), 0); // 0,1,2,3...",
        notes: Some("Simple and elegant for sequences"),
        since: Standard::Cpp11,
        related: "generate",
    },
];
