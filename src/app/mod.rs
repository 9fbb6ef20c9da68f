//! Application use cases.

mod post;
mod user;

pub use post::{
    post_all, post_count, post_count_where, post_create, post_destroy, post_destroy_many,
    post_destroy_where, post_find, post_find_all_by, post_find_by, post_find_many,
    post_find_where, post_first, post_first_n, post_ids, post_ids_where, post_int_col, post_last,
    post_last_n, post_page, post_page_resume, post_str_col, post_update, PostCreateReq, PostDto,
    PostPage, PostUpdateReq,
};
pub use user::{
    post_user, user_all, user_count, user_count_where, user_create, user_create_post,
    user_destroy, user_destroy_many, user_destroy_where, user_find, user_find_all_by,
    user_find_by, user_find_many, user_find_where, user_first, user_first_n, user_ids,
    user_ids_where, user_int_col, user_last, user_last_n, user_page, user_page_resume,
    user_posts, user_str_col, user_update, UserCreateReq, UserDto, UserPage, UserUpdateReq,
};
