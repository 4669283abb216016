//! Console output utilities: headers, alert boxes, message lines and the
//! folder table printed after every command.

mod boxes;

pub use boxes::*;
