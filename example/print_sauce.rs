use ansi_sauce::{
    AnsiParser, SauceDataType, SauceInfo, decode, decode_cp437, decode_text,
    encoding_rs::Encoding, strip_sauce,
};
use clap::Parser;
use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;
use std::process;

/// Print SAUCE metadata from files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to read SAUCE information from
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Show comments if present
    #[arg(short, long)]
    comments: bool,

    /// Show raw technical details
    #[arg(short = 'r', long)]
    raw: bool,

    /// Render the art as HTML
    #[arg(long, conflicts_with = "text")]
    html: bool,

    /// Print the art text with the drawing stripped
    #[arg(long)]
    text: bool,

    /// Encoding label of the art (e.g. gb18030, big5); defaults to CP437
    #[arg(short, long)]
    encoding: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    // Read the file
    let data = match fs::read(&args.file) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("Error reading file '{}': {}", args.file.display(), err);
            process::exit(1);
        }
    };

    if args.html || args.text {
        print_art(&args, strip_sauce(&data));
        return;
    }

    let Some(sauce) = decode(&data) else {
        println!("No SAUCE record found in '{}'", args.file.display());
        process::exit(0);
    };
    let info = SauceInfo::from(&sauce);

    // Print basic information
    println!("SAUCE Information for '{}'", args.file.display());
    println!("{}", "=".repeat(60));

    if !info.title().is_empty() {
        println!("Title:    {}", info.title());
    }
    if !info.author().is_empty() {
        println!("Author:   {}", info.author());
    }
    if !info.group().is_empty() {
        println!("Group:    {}", info.group());
    }
    match info.date() {
        Some(date) => println!("Date:     {date}"),
        None => println!("Date:     -"),
    }
    println!("Type:     {}", sauce.data_type.label());
    if let Some(file_type) = info.filetype() {
        println!("Format:   {file_type}");
    }
    if info.filesize() > 0 {
        println!("FileSize: {} bytes", info.filesize());
    }

    if let (Some(columns), Some(lines)) = (info.character_width(), info.number_of_lines()) {
        println!("Size:     {columns}x{lines} (columns x rows)");
    } else if sauce.data_type == SauceDataType::BinaryText {
        println!("Size:     {}x{} (calculated)", sauce.columns(), sauce.rows());
    }
    if let (Some(width), Some(height)) = (info.pixel_width(), info.pixel_height()) {
        println!("Size:     {width}x{height} pixels");
    }
    if let Some(depth) = info.pixel_depth() {
        println!("Depth:    {depth} bits");
    }
    if let Some(rate) = info.sample_rate() {
        println!("Rate:     {rate} Hz");
    }
    if !info.font_name().is_empty() {
        println!("Font:     {}", info.font_name());
    }
    if info.ice_colors() == Some(true) {
        println!("iCE Colors: Yes");
    }

    // Print comments if requested
    if args.comments && !info.comments().is_empty() {
        println!();
        println!("Comments ({}):", sauce.comment_count);
        println!("{}", "-".repeat(40));
        for (i, comment) in info.comments().lines().enumerate() {
            println!("{:3}: {}", i + 1, comment);
        }
    }

    // Print raw technical details if requested
    if args.raw {
        println!();
        println!("Raw SAUCE Data:");
        println!("{}", "-".repeat(40));
        println!("File Type:      {}", sauce.file_type);
        println!("TInfo1:         {}", sauce.tinfo1);
        println!("TInfo2:         {}", sauce.tinfo2);
        println!("TInfo3:         {}", sauce.tinfo3);
        println!("TInfo4:         {}", sauce.tinfo4);
        let flags = sauce.flags.bits();
        println!("TFlags:         0b{flags:08b} (0x{flags:02X})");
        if !sauce.font_name.is_empty() {
            println!("TInfoS:         {:?}", sauce.font_name);
        }
        println!("Record Size:    {} bytes", sauce.record_len());
    }
}

fn print_art(args: &Args, content: &[u8]) {
    let text = match &args.encoding {
        Some(label) => match Encoding::for_label(label.as_bytes()) {
            Some(encoding) => decode_text(content, encoding),
            None => {
                eprintln!("Unknown encoding '{label}'");
                process::exit(1);
            }
        },
        None => Cow::Owned(decode_cp437(content)),
    };

    let parser = AnsiParser::new(&text);
    if args.html {
        match parser.to_html() {
            Ok(html) => println!("<pre>{html}</pre>"),
            Err(err) => {
                eprintln!("Error rendering '{}': {}", args.file.display(), err);
                process::exit(1);
            }
        }
    } else {
        println!("{}", parser.to_stripped_text());
    }
}
