pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod cart_repository;
    }
}

pub mod modules {
    pub mod certificate_cart {
        pub mod core {
            pub mod cart;
            pub mod catalog;
            pub mod compute;
            pub mod decision;
            pub mod pricing;
            pub mod rollup;
        }
        pub mod application {
            pub mod commit;
            pub mod errors;
            pub mod stamps;
        }
        pub mod use_cases {
            pub mod get_cart {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod add_cart_item {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_cart_item_quantity {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod clear_cart {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod bulk_import {
                pub mod command;
                pub mod fields;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod prepare_checkout {
                pub mod handler;
                pub mod order;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_certificate_templates {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http;
            }
        }
    }
}

pub mod shell;
