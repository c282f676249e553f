// Identity providers for hosts that resolve the line number themselves, and for tests.
pub mod test;
