mod app;
mod config;
mod error;
mod library;
mod runtime;
mod ui;
mod view;

#[cfg(test)]
mod test_support;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()?;
    Ok(())
}
