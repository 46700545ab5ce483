use blasm::{
    error::Error,
    image::Image,
    msg::{self, Msg},
};
use color_print::cprintln;
use std::{
    fs::File,
    io::{BufWriter, Read, Write},
};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {author}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(author, version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Assembly source file
    input: String,

    /// Memory image to write (1024 lines of 5-digit hex)
    output: String,
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    println!("Blitter Assembler");

    println!("1. Read Source");
    println!("  < {}", &args.input);
    let src = read_source(&args.input).unwrap_or_else(|err| fail(err));
    let src_lines: Vec<&str> = src.lines().collect();

    println!("2. Layout & Encode");
    let asm = match blasm::assemble(&src) {
        Ok(asm) => asm,
        Err(err) => {
            Msg::from(&err).print(&args.input, &src_lines);
            std::process::exit(1);
        }
    };
    msg::dump(&asm.warnings, &args.input, &src_lines);
    println!("  - {} of {} words used", asm.image.used(), arch::ROM_SIZE);

    println!("3. Write Image");
    println!("  > {}", &args.output);
    write_image(&asm.image, &args.output).unwrap_or_else(|err| fail(err));

    println!("Assembled OK");
}

fn read_source(path: &str) -> Result<String, Error> {
    let mut file = File::open(path).map_err(|err| Error::FileOpen(path.to_string(), err))?;
    let mut src = String::new();
    file.read_to_string(&mut src)
        .map_err(|err| Error::FileRead(path.to_string(), err))?;
    Ok(src)
}

fn write_image(image: &Image, path: &str) -> Result<(), Error> {
    let file = File::create(path).map_err(|err| Error::FileCreate(path.to_string(), err))?;
    let mut out = BufWriter::new(file);
    image
        .write_hex(&mut out)
        .and_then(|_| out.flush())
        .map_err(|err| Error::FileWrite(path.to_string(), err))
}

fn fail(err: Error) -> ! {
    cprintln!("<red,bold>error</>: {}", err);
    if let Some(cause) = std::error::Error::source(&err) {
        cprintln!("     <blue>=</> {}", cause);
    }
    std::process::exit(1);
}
