use linecode::ecc::{flip_bit, format_bits, parse_bits, LinearCode, CODEWORD_BITS};
use linecode::Result;

fn main() {
    env_logger::init();

    let code = LinearCode::new();
    let words: Vec<String> = std::env::args().skip(1).collect();

    let outcome = if words.is_empty() {
        walkthrough(&code)
    } else {
        words.iter().try_for_each(|word| analyze(&code, word))
    };

    if let Err(e) = outcome {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Encodes every message, flips every bit in turn and corrects it again.
fn walkthrough(code: &LinearCode) -> Result<()> {
    println!("syndrome table:");
    for (syndrome, error_vector) in code.syndrome_table() {
        println!("  {} -> {}", format_bits(&syndrome), format_bits(&error_vector));
    }

    for codeword in code.codewords() {
        let message = code.decode(&codeword)?;
        println!(
            "message {} -> codeword {}",
            format_bits(&message),
            format_bits(&codeword)
        );

        for position in 0..CODEWORD_BITS {
            let received = flip_bit(&codeword, position)?;
            let corrected = code.correct(&received)?;
            println!(
                "  received {}  syndrome {}  corrected {}  decoded {}",
                format_bits(&received),
                format_bits(&code.syndrome(&received)?),
                format_bits(&corrected),
                format_bits(&code.decode(&corrected)?)
            );
        }
    }

    Ok(())
}

fn analyze(code: &LinearCode, word: &str) -> Result<()> {
    let received = parse_bits(word, CODEWORD_BITS)?;
    let analysis = code.analyze(&received)?;

    println!("word {}", format_bits(&analysis.received));
    println!("  syndrome  {}", format_bits(&analysis.syndrome));
    if analysis.is_codeword() {
        println!("  valid codeword");
    }
    match (analysis.error_vector, analysis.corrected, analysis.message) {
        (Some(error_vector), Some(corrected), Some(message)) => {
            println!("  error     {}", format_bits(&error_vector));
            println!("  corrected {}", format_bits(&corrected));
            println!("  message   {}", format_bits(&message));
        }
        _ => println!("  uncorrectable: more than one bit in error"),
    }

    Ok(())
}
