//! various helper functions used to simplify unit tests.
//!
//! **Note**: This module is only compiled and used during testing. Hence, ther might be no
//! further documentation show up.

#[cfg(test)]
pub mod test_helper {
    use log::Level;

    /// Checks that exactly the given messages were logged on the given level (in this order).
    pub fn check_logs(level: Level, expected_messages: Vec<&str>) {
        testing_logger::validate(|captured_logs| {
            let captured_logs: Vec<_> = captured_logs.iter().filter(|l| l.level == level).collect();
            assert_eq!(captured_logs.len(), expected_messages.len());
            for log in captured_logs.iter().zip(expected_messages.clone()) {
                assert_eq!(log.0.body, log.1);
            }
        });
    }
}
