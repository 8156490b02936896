pub mod application {
    pub mod menu {
        pub mod page_scanner;
        pub mod scan_menu;
    }
}

pub mod domain {
    pub mod logger;
    pub mod menu {
        pub mod classifier;
        pub mod errors;
        pub mod model;
        pub mod price;
        pub mod services;
        pub mod use_cases {
            pub mod scan_menu;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
