pub mod view_handler;

pub use view_handler::{
    __path_close_view, __path_get_view, __path_open_view, __path_reload_view,
    __path_select_category, __path_toggle_category, close_view, get_view, open_view,
    reload_view, select_category, toggle_category,
};
