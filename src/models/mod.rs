pub mod note_post;

pub use note_post::{NotePost, NotePostForm};
