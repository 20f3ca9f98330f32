pub mod common;

mod test_session_flow;
