//! Prompt text sent to the chat model.

use crate::game::Board;

pub const SYSTEM_PROMPT: &str = "You are an expert 2048 game strategist. Your role is to analyze the current board state and recommend the best moves.

Rules of 2048:
- Tiles with numbers slide in the direction of movement
- When two tiles with the same number touch, they merge into one with the sum
- After each move, a new tile (2 or 4) appears randomly
- The goal is to create a tile with value 2048

Strategy Guidelines:
- Prioritize keeping the board organized and open
- Try to keep high-value tiles in corners
- Consider both immediate gains and long-term positioning

When analyzing the board:
1. Assess the current state (which tiles exist, their positions)
2. Evaluate each possible move (up, down, left, right)
3. Consider potential outcomes and strategic value
4. Rank moves by effectiveness

Respond with valid JSON only, following the exact format specified.";

const RESPONSE_TEMPLATE: &str = r#"{
  "recommended_moves": [
    {
      "direction": "UP|DOWN|LEFT|RIGHT",
      "reasoning": "explanation",
      "confidence": 0.0-1.0
    }
  ],
  "game_analysis": "overall assessment"
}"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardMetrics {
    pub empty_spaces: usize,
    pub max_tile: u32,
    pub total_value: u64,
}

impl BoardMetrics {
    pub fn of(board: &Board) -> Self {
        Self {
            empty_spaces: board.empty_count(),
            max_tile: board.max_tile(),
            total_value: board.total_value(),
        }
    }
}

fn format_row(row: &[u32]) -> String {
    let cells: Vec<String> = row.iter().map(|value| value.to_string()).collect();
    format!("[{}]", cells.join(", "))
}

/// `Current Board State:` header followed by one `Row i: [..]` line per row.
pub fn format_board_for_analysis(board: &Board) -> String {
    let mut out = String::from("Current Board State:\n");
    for (i, row) in board.rows().iter().enumerate() {
        out.push_str(&format!("Row {}: {}\n", i, format_row(row)));
    }
    out
}

pub fn build_user_prompt(board: &Board, num_suggestions: u32) -> String {
    let metrics = BoardMetrics::of(board);
    format!(
        "Analyze the following 2048 game state and recommend moves:\n\n\
         {analysis}\n\
         Board Metrics:\n\
         - Empty spaces: {empty}\n\
         - Highest tile: {max}\n\
         - Total value: {total}\n\n\
         Provide exactly {num_suggestions} move recommendation(s).\n\n\
         Respond with the following JSON format (valid JSON only):\n\
         {template}",
        analysis = format_board_for_analysis(board),
        empty = metrics.empty_spaces,
        max = metrics.max_tile,
        total = metrics.total_value,
        template = RESPONSE_TEMPLATE,
    )
}
