use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use introspect_core::prelude::*;
use introspect_utils::{debug, info, init_logging_with_config, LogConfig, LogFormat, LogLevel};

/// Caller resolution and type-name rendering from the command line.
#[derive(Parser, Debug)]
#[command(name = "introspect")]
#[command(version)]
#[command(about = "Caller resolution and type-name rendering for diagnostics", long_about = None)]
struct Cli
{
    /// Log level (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,
    /// Log format: pretty or json (overrides INTROSPECT_LOG_FORMAT)
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands
{
    /// Split raw symbol names into module and function
    Parse
    {
        /// Symbols such as `example.com/app.(*Server).Run` or `my_crate::net.Server::run`
        #[arg(required = true)]
        raw: Vec<String>,
        /// Fail when the same symbol is given more than once
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
    /// Resolve the frames of this command's own call stack
    Caller
    {
        /// Deepest frame to resolve, counted from the reporting function
        #[arg(short, long, default_value_t = 4)]
        depth: u8,
    },
    /// Render a built-in sample descriptor
    TypeName
    {
        #[arg(value_enum)]
        sample: Sample,
    },
}

/// Sample descriptors for `type-name`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Sample
{
    /// `Vec<Box<Request>>`
    VecOfBoxed,
    /// `HashMap<String, Vec<u64>>`
    StringMap,
    /// Both ends of an `mpsc` channel of boxed requests
    Channels,
    /// A variadic handler signature with two results
    HandlerFn,
}

struct Request;

impl Describe for Request
{
    fn describe() -> TypeDescriptor
    {
        TypeDescriptor::structure(NamedType::new("example.com/service/api", "Request"))
    }
}

fn main()
{
    let cli = Cli::parse();

    let mut config = LogConfig::from_env();
    if let Some(level) = cli.log_level {
        config = config.with_level(level);
    }
    if let Some(format) = cli.log_format {
        config = config.with_format(format);
    }
    match init_logging_with_config(&config) {
        Ok(Some(log_file)) => debug!("Writing logs to {}", log_file.display()),
        Ok(None) => {}
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(1);
        }
    }

    if let Err(e) = run_command(cli.command) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run_command(command: Commands) -> IntrospectResult<()>
{
    match command {
        Commands::Parse { raw, strict } => {
            info!("Parsing {} symbol(s)", raw.len());
            let distinct = slice_to_set(raw.iter().map(String::as_str), strict)?;
            debug!(distinct = distinct.len(), "deduplicated input");
            for symbol in &raw {
                print_caller(symbol, &parse_symbol(symbol));
            }
            Ok(())
        }
        Commands::Caller { depth } => {
            info!("Resolving {} frame(s)", u16::from(depth) + 1);
            report_callers(depth);
            Ok(())
        }
        Commands::TypeName { sample } => {
            info!("Rendering sample {:?}", sample);
            for descriptor in sample_descriptors(sample) {
                println!("{}", type_name(Some(&descriptor)));
                println!("  display: {descriptor}");
            }
            Ok(())
        }
    }
}

#[inline(never)]
fn report_callers(depth: u8)
{
    for level in 0..=depth {
        let info = resolve_frame(isize::from(level));
        let label = format!("frame {level}");
        print_caller(&label, &info);
    }
}

fn print_caller(label: &str, info: &CallerInfo)
{
    println!("{label}");
    println!("  module:   {}", info.module);
    println!("  function: {}", info.function);
    println!("  unknown:  {}", info.is_unknown());
}

fn sample_descriptors(sample: Sample) -> Vec<TypeDescriptor>
{
    match sample {
        Sample::VecOfBoxed => vec![TypeDescriptor::of::<Vec<Box<Request>>>()],
        Sample::StringMap => vec![TypeDescriptor::of::<std::collections::HashMap<String, Vec<u64>>>()],
        Sample::Channels => vec![
            TypeDescriptor::of::<std::sync::mpsc::Sender<Box<Request>>>(),
            TypeDescriptor::of::<std::sync::mpsc::Receiver<Box<Request>>>(),
            TypeDescriptor::chan(ChanDir::Both, Request::describe()),
        ],
        Sample::HandlerFn => {
            let signature = FuncSignature::new(
                [
                    TypeDescriptor::of::<Box<Request>>(),
                    TypeDescriptor::slice(TypeDescriptor::primitive("string")),
                ],
                [TypeDescriptor::primitive("int"), TypeDescriptor::primitive("error")],
            )
            .variadic();
            vec![TypeDescriptor::func(signature)]
        }
    }
}
