pub mod invocation;

pub use invocation::{DeliveredTo, InvocationController, InvocationResponse};
