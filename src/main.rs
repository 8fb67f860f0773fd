use std::io;

use hotseat_chess::cli::cli_top::run_stdio_loop;

fn main() -> io::Result<()> {
    run_stdio_loop()
}
