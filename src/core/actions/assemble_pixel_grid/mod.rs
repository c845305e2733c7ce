pub mod assemble_pixel_grid;
