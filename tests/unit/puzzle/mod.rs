mod placement;
mod word;
