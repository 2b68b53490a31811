//! C++ functions catalog: STL algorithms and container member functions.
//!
//! Five tables in fixed display order; header colors follow the palette of
//! the published workbook.

mod algorithms;
mod containers;
mod map;
mod set;
mod vector;

use super::entry::{
    ALGORITHM_COLUMNS, ContainerSummary, Entry, METHOD_COLUMNS, SUMMARY_COLUMNS,
};
use crate::record::{SheetSource, Table};

/// `<algorithm>` and `<numeric>` functions.
pub static ALGORITHMS: Table<'static, Entry> = Table::new(
    "algorithms",
    "STL Algorithms",
    0x0044_72C4,
    ALGORITHM_COLUMNS,
    algorithms::ALGORITHM_ENTRIES,
);

/// `std::vector` member functions.
pub static VECTOR_METHODS: Table<'static, Entry> = Table::new(
    "vector",
    "Vector Methods",
    0x0070_AD47,
    METHOD_COLUMNS,
    vector::VECTOR_ENTRIES,
);

/// `std::map` / `std::unordered_map` member functions.
pub static MAP_METHODS: Table<'static, Entry> = Table::new(
    "map",
    "Map Methods",
    0x00FF_C000,
    METHOD_COLUMNS,
    map::MAP_ENTRIES,
);

/// `std::set` / `std::unordered_set` member functions.
pub static SET_METHODS: Table<'static, Entry> = Table::new(
    "set",
    "Set Methods",
    0x005B_9BD5,
    METHOD_COLUMNS,
    set::SET_ENTRIES,
);

/// Summaries of the remaining containers.
pub static OTHER_CONTAINERS: Table<'static, ContainerSummary> = Table::new(
    "containers",
    "Other Containers",
    0x00A5_A5A5,
    SUMMARY_COLUMNS,
    containers::CONTAINER_SUMMARIES,
);

/// All tables in display order.
pub static TABLES: [&'static dyn SheetSource; 5] = [
    &ALGORITHMS,
    &VECTOR_METHODS,
    &MAP_METHODS,
    &SET_METHODS,
    &OTHER_CONTAINERS,
];
