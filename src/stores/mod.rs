pub mod id_counter;
pub mod user_list;
