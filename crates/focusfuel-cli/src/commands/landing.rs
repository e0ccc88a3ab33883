//! Landing-page copy, rendered as plain text.

use clap::Subcommand;

use focusfuel_core::content;

#[derive(Subcommand)]
pub enum LandingAction {
    /// Print the full landing page
    Show,
    /// Print the feature cards
    Features,
    /// Print the how-it-works steps
    How,
}

pub fn run(action: LandingAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        LandingAction::Show => {
            print_hero();
            println!();
            print_features();
            println!();
            print_how();
            println!();
            print_cta();
        }
        LandingAction::Features => print_features(),
        LandingAction::How => print_how(),
    }
    Ok(())
}

fn print_hero() {
    println!("{} — {}", content::APP_NAME, content::TAGLINE);
    println!();
    println!("{}", content::HERO_HEADLINE);
    println!("{}", content::HERO_SUBHEADLINE);
    println!();
    println!("\"{}\"", content::HERO_QUOTE);
}

fn print_features() {
    println!("Why {}?", content::APP_NAME);
    println!("{}", content::FEATURES_INTRO);
    println!();
    for feature in content::FEATURES {
        println!("  {}", feature.title);
        println!("    {}", feature.text);
    }
}

fn print_how() {
    println!("How it works");
    for (i, step) in content::HOW_IT_WORKS.iter().enumerate() {
        println!("  {}. {}", i + 1, step.title);
        println!("     {}", step.text);
    }
}

fn print_cta() {
    println!("{}", content::CTA_HEADLINE);
    println!("{}", content::CTA_TEXT);
}
