pub mod application {
    pub mod favorite {
        pub mod registry;
    }
    pub mod recipe {
        pub mod catalog;
    }
    pub mod search {
        pub mod search_recipes;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod favorite {
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod registry;
        }
    }
    pub mod recipe {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod catalog;
        }
    }
    pub mod search {
        pub mod filter;
        pub mod model;
        pub mod use_cases {
            pub mod search_recipes;
        }
    }
}
