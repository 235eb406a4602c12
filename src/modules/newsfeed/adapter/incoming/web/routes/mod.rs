pub mod newsfeed;

pub use newsfeed::{
    create_newsfeed_item_handler, delete_newsfeed_item_handler, get_newsfeed_item_handler,
    list_newsfeed_handler, update_newsfeed_item_handler,
};
