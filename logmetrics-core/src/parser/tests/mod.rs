mod pattern_tests;

//-----------------------------------------------------------------------------
// Test helpers
//-----------------------------------------------------------------------------
pub fn access_line(time: &str, status: &str, response_time: &str) -> String {
    format!(
        r#"10.0.0.1 - - [{time}] "GET /index.html HTTP/1.1" {status} 612 "-" "curl/8.4.0" {response_time}"#
    )
}

pub fn line(status: &str, response_time: &str) -> String {
    access_line("01/Jan/2020:00:00:05 +0000", status, response_time)
}
