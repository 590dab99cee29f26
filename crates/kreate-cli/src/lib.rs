//! CLI logic for the Kreate element generator.
//!
//! This module turns command-line arguments into a creation request, runs it
//! through an [`ElementFactory`] and writes the generated markup out.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
};

use log::info;

use kreate::{Created, Element, ElementFactory, KreateError, Options, Request};

/// Run the Kreate CLI application
///
/// This function builds the request described by `args`, generates the
/// elements and writes the rendered markup to the output file or stdout.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `KreateError` for:
/// - File I/O errors
/// - Configuration or request file loading errors
/// - Malformed requests in strict mode
pub fn run(args: &Args) -> Result<(), KreateError> {
    info!(
        shorthand:? = args.shorthand,
        request_path:? = args.request,
        output_path:? = args.output;
        "Generating elements"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if args.strict {
        app_config = app_config.with_mode(kreate::config::Mode::Strict);
    }

    let request = read_request(args)?;
    let factory = ElementFactory::new(app_config);
    let created = factory.create(request, args.count, args.format.as_deref())?;
    let rendered = render(&created);

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            info!(output_file = path; "Markup written");
        }
        None => io::stdout().lock().write_all(rendered.as_bytes())?,
    }

    Ok(())
}

fn read_request(args: &Args) -> Result<Request, KreateError> {
    if let Some(path) = &args.request {
        let source = fs::read_to_string(path)?;
        let options: Options = toml::from_str(&source)
            .map_err(|err| KreateError::Config(format!("Invalid request file {path}: {err}")))?;
        return Ok(Request::Config(options));
    }

    Ok(args.shorthand.clone().into())
}

/// Render a creation result as text output.
///
/// Collections and markup strings become one line; an element list puts
/// each element on its own line. An empty result renders as nothing.
pub fn render(created: &Created) -> String {
    let lines: Vec<String> = match created {
        Created::Elements(elements) => elements.iter().map(Element::outer_html).collect(),
        other => vec![other.to_html()],
    };

    lines
        .into_iter()
        .filter(|line| !line.is_empty())
        .map(|line| line + "\n")
        .collect()
}
