//! Testing data and utilities.
//!
//! Raw data is found in `data/`.

mod constants;
pub use constants::{
    NATIVE_DOUBLE_BOUNDARY, NATIVE_DOUBLE_BOUNDARY_ROOT, NATIVE_LIMIT_OPERAND, REGRESSION_OPERANDS,
    SINGLE_REFINEMENT_OPERAND,
};

mod free;
pub use free::{parse_operand, powers_of_two_past_f64, regression_operands};
