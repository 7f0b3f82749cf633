pub mod env {
    pub const ENV_PREFIX: &str = "COLEGIO";
}

/// Header the upstream authentication layer uses to pass the caller's email.
pub const AUTHENTICATED_USER_HEADER: &str = "x-authenticated-user";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub const BASE_URL: &str = "http://localhost:3000";
    pub const MAX_DB_CONNECTIONS: u32 = 5;

    pub mod email_client {
        pub const BASE_URL: &str = "https://api.postmarkapp.com/";
        pub const SENDER: &str = "no-reply@colegio.edu.co";
        pub const TIMEOUT_IN_MILLIS: u64 = 10_000;
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";

    pub mod email_client {
        use std::time::Duration;

        pub const SENDER: &str = "test@email.com";
        pub const TIMEOUT: Duration = std::time::Duration::from_millis(200);
    }
}
