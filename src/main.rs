use miette::Result;

/// Main entry point for the lcg-cycle CLI tool
fn main() -> Result<()> {
    // Install miette's panic and error handler for readable error reporting
    miette::set_panic_hook();

    // Run the library's main function
    lcg_cycle::run()
}
