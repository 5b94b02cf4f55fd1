pub mod d400_library_overview;
pub mod d401_yearly_summary;
