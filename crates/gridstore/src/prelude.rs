//! Prelude module - common imports for gridstore users
//!
//! ```rust
//! use gridstore::prelude::*;
//! ```

pub use crate::{
    // Cell types
    CellValue,
    DateMode,
    // Error types
    Error,
    Result,
    SheetRef,
    Span,

    // Contract
    TabularBackend,
    TabularStore,

    // XLSX backend
    XlsxBackend,
    XlsxError,
    XlsxOptions,
    XlsxStore,
};
