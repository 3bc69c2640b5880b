//! Output formatting for derived wizard values.
//!
//! - [`report`] - network and step status reports
//! - [`terminal`] - field formatting and colors

mod report;
mod terminal;

pub use report::{
    format_host_subnet_row, format_step_row, print_host_subnets, print_network_values,
    print_step_statuses,
};
pub use terminal::{colored_status, format_field};
