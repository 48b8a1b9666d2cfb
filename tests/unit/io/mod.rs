mod image;
mod progress;
mod wordlist;
