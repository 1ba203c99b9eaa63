pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod record_store;
    }
}

pub mod modules {
    pub mod registry {
        pub mod core {
            pub mod changes;
            pub mod decision;
            pub mod evolve;
            pub mod records;
            pub mod state;
            pub mod views;
        }
        pub mod use_cases {
            pub mod create_event {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_event {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_event {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod select_event {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod register_attendee {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_attendee {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_events {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_attendees {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod application {
            pub mod errors;
            pub mod handler;
        }
        pub mod adapters {
            pub mod outbound {
                pub mod collections;
            }
        }
    }
}

pub mod shell;
