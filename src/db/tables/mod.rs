pub mod note_posts;
