mod app;
use quiz_pass::*;

use app::QuizApp;
use export::json::{JsonFileEndpoint, import_quiz};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let quiz_path = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => path,
        None => match rfd::FileDialog::new()
            .add_filter("Quiz files", &["json"])
            .pick_file()
        {
            Some(path) => path,
            None => {
                log::info!("no quiz selected, exiting");
                return Ok(());
            }
        },
    };

    let quiz = import_quiz(&quiz_path).inspect_err(|e| {
        log::error!("cannot load quiz from '{}': {}", quiz_path.display(), e);
    })?;

    // Answers are written next to the quiz file.
    let results_dir = quiz_path
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let endpoint = JsonFileEndpoint::new(results_dir);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([520.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Quiz",
        options,
        Box::new(|_cc| Ok(Box::new(QuizApp::new(quiz, endpoint)))),
    )?;
    Ok(())
}
