pub mod application {
    pub mod admin {
        pub mod get_dashboard;
    }
    pub mod auth {
        pub mod current_user;
        pub mod login;
        pub mod logout;
    }
    pub mod cart {
        pub mod add_item;
        pub mod checkout;
        pub mod get_cart;
        pub mod remove_item;
        pub mod set_quantity;
    }
    pub mod catalog {
        pub mod browse;
        pub mod get_by_id;
        pub mod get_related;
        pub mod get_trending;
    }
    pub mod order {
        pub mod get_for_user;
    }
    pub mod preferences {
        pub mod get_theme;
        pub mod toggle_theme;
    }
    pub mod wishlist {
        pub mod add;
        pub mod get_all;
        pub mod remove;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod admin {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod get_dashboard;
        }
    }
    pub mod auth {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod current_user;
            pub mod login;
            pub mod logout;
        }
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod checkout;
            pub mod get_cart;
            pub mod remove_item;
            pub mod set_quantity;
        }
    }
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod query;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod browse;
            pub mod get_by_id;
            pub mod get_related;
            pub mod get_trending;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_for_user;
        }
    }
    pub mod preferences {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_theme;
            pub mod toggle_theme;
        }
    }
    pub mod wishlist {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add;
            pub mod get_all;
            pub mod remove;
        }
    }
}
