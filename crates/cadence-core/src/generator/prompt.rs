//! Prompt text sent to the completion service.

use jiff::civil::Date;

use crate::{engine::calendar::month_day_label, models::Weekday};

/// Standing instructions: output shape and scheduling policy.
pub const SYSTEM_PROMPT: &str = r#"You are an expert study planner that creates comprehensive weekly schedules.

REQUIRED OUTPUT STRUCTURE:
You must provide a complete JSON response with these exact fields:
1. "urgent": Array of urgent tasks (title, due date as string, priority: "high"/"medium"/"low")
2. "days": Array of 7 day objects (Monday-Sunday), each with:
   - "day": Day name (e.g., "Monday")
   - "date": Date string (e.g., "Oct 15")
   - "sessions": Array of time blocks, each with:
     * "time": Time range (e.g., "6:00 AM - 7:00 AM")
     * "type": One of: "class", "study", "work", "rest", "commute", "free"
     * "title": Activity description
     * "icon": Emoji icon
     * "focus": Subject/topic (can be empty string for non-study sessions)
3. "stats": Object with:
   - "totalHours": Total study hours as number
   - "subjects": Array of subjects with name, hours (number), and color (hex)
4. "tips": Array of 3-5 actionable study tips as strings

SCHEDULING RULES:
- Create COMPLETE 24-hour schedules (6:00 AM to 6:00 AM next day)
- Use 30-60 minute time blocks
- Include ALL activities: sleep, meals, commute, classes, work, study, breaks
- Morning: 6:00-7:00 AM wake up/breakfast
- Meals: Breakfast 7-8 AM, Lunch 12-1 PM, Dinner 6-7 PM
- Sleep: 8 hours minimum (usually 10 PM - 6 AM, adjust after night shifts)
- Buffer: 15-30 min before/after fixed commitments

STUDY SESSION DESIGN:
- Max 2-3 hour study blocks with 10-15 min breaks
- High-focus work: 8 AM - 12 PM (use for hardest subjects)
- Medium-focus: 2 PM - 5 PM
- Light review: 7 PM - 9 PM (flashcards, practice problems)
- NO heavy studying after 9 PM or immediately after work shifts
- Include specific topics in "focus" field for study sessions

COMMUTE OPTIMIZATION:
- Type: "commute"
- Suggest passive learning: podcasts, flashcard apps, audio notes
- Keep focus field relevant but acknowledge limited deep work

SUBJECT DISTRIBUTION:
- Calculate total study hours across the week
- Prioritize subjects with nearest deadlines
- Rotate subjects daily to maintain engagement
- Use spaced repetition principles
- Track hours per subject in stats

ENERGY MANAGEMENT:
- Post-shift: Schedule rest/recovery, not study
- After night shifts: 8+ hours sleep before next activity
- Vary session intensity throughout day
- Include adequate rest periods

ICONS:
Use relevant emojis: 📚 study, 🏫 class, 💼 work, 😴 sleep, 🍽️ meals, 🚗 commute, ☕ break, etc."#;

/// User message embedding today's weekday and date around the free-text
/// schedule description.
pub fn user_message(today: Date, input: &str) -> String {
    format!(
        "Today is {}, {}.\n\n\
         My schedule:\n{}\n\n\
         Create a complete weekly plan starting from this Monday. Make sure:\n\
         1. Every single hour from 6:00 AM to midnight is planned\n\
         2. Include realistic wake up times, meal times, and travel times\n\
         3. Don't skip hours - if I have class at 12:00, plan what I'm doing from 6:00-12:00\n\
         4. Add specific study goals for each study session\n\
         5. Be realistic about energy levels after work shifts",
        Weekday::of(today),
        month_day_label(today),
        input.trim()
    )
}
