pub mod language_select;
pub mod nav;
pub mod skeleton;
pub mod star_rating;
