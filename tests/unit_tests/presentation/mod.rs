mod environment_test;
mod session_cookie_test;
