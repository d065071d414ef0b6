pub mod application {
    pub mod credential {
        pub mod check;
    }
    pub mod generation {
        pub mod generate;
    }
}

pub mod domain {
    pub mod logger;
    pub mod credential {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod check;
        }
    }
    pub mod generation {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod generate;
        }
    }
}
