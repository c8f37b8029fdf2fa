//! The fixed eight-week curriculum, loaded into the store at provisioning
//! time. The catalog is versioned seed data: \[`load_catalog`\] replaces
//! the whole `tasks` table and is never driven by end-user action.

use rusqlite::params;
use uuid::Uuid;

use super::Database;
use crate::error::Result;
use crate::models::TaskCategory::{
    BrooderCare, Environment, FeedingWater, HealthCheck, Milestone, Preparation,
};
use crate::models::TaskFrequency::{Daily, Once};
use crate::models::{TaskCategory, TaskFrequency};

pub struct SeedTask {
    pub title: &'static str,
    pub description: &'static str,
    pub detailed_content: &'static str,
    pub week_number: i64,
    pub day_number: Option<i64>,
    pub frequency: TaskFrequency,
    pub category: TaskCategory,
    pub sort_order: i64,
}

/// Replace the task catalog with the built-in curriculum and return the
/// number of entries loaded. Completions referencing the old catalog rows
/// cascade away with them.
pub fn load_catalog(db: &Database) -> Result<usize> {
    db.with_connection(|conn| {
        conn.execute("DELETE FROM tasks", [])?;
        let mut stmt = conn.prepare(
            "INSERT INTO tasks (id, title, description, detailed_content, week_number, day_number, frequency, category, sort_order)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )?;
        for task in CATALOG {
            stmt.execute(params![
                Uuid::new_v4().to_string(),
                task.title,
                task.description,
                task.detailed_content,
                task.week_number,
                task.day_number,
                task.frequency.as_str(),
                task.category.as_str(),
                task.sort_order,
            ])?;
        }
        Ok(())
    })?;

    for week in 0..=5 {
        let count = CATALOG.iter().filter(|t| t.week_number == week).count();
        tracing::info!("week {}: {} tasks", week, count);
    }

    Ok(CATALOG.len())
}

pub const CATALOG: &[SeedTask] = &[
    // Week 0: preparation
    SeedTask {
        title: "Set up brooder container",
        description: "Choose and prepare your brooder container",
        detailed_content: r#"For 6 or fewer chicks, a large plastic storage tote (at least 18" x 24") works perfectly. For larger flocks, consider a livestock water tank, pet playpen, or DIY plywood box (4'x4' for up to 25 chicks).

Ensure it has:
• No sharp edges
• Stable, flat bottom
• Enough space for feed, water, and heat source
• Sides tall enough to prevent drafts and escapes (12"+)"#,
        week_number: 0,
        day_number: None,
        frequency: Once,
        category: Preparation,
        sort_order: 1,
    },
    SeedTask {
        title: "Install heat source",
        description: "Set up heat plate or lamp",
        detailed_content: r#"Heat plates are strongly recommended over heat lamps for safety. They eliminate fire risk and allow chicks to self-regulate temperature.

Heat plate sizing:
• 10-15 chicks: 10" x 10" plate
• 15-30 chicks: 16" x 16" plate

Install at highest setting initially. Place thermometer at chick level away from heat source."#,
        week_number: 0,
        day_number: None,
        frequency: Once,
        category: Preparation,
        sort_order: 2,
    },
    SeedTask {
        title: "Gather essential equipment",
        description: "Collect all necessary supplies",
        detailed_content: r#"Must-haves:
□ Brooder container
□ Heat plate with adjustable height
□ Thermometer
□ Chick waterer (1 quart per 6 chicks)
□ Chick feeder (12" per 10-15 chicks)
□ Chick starter feed
□ Paper towels (first 4 days bedding)
□ Pine shavings (after day 4) - NOT cedar!
□ Chick grit
□ Digital scale
□ Electrolytes/vitamins
□ Small first aid kit"#,
        week_number: 0,
        day_number: None,
        frequency: Once,
        category: Preparation,
        sort_order: 3,
    },
    SeedTask {
        title: "Choose brooder location",
        description: "Find the ideal spot for your brooder",
        detailed_content: r#"Location requirements:
• Draft-free area
• Away from pets and young children
• Easy access to electricity
• Easy to clean (not carpet!)
• Consider noise level

IMPORTANT: Keep far from kitchen! Teflon/non-stick pan fumes are toxic to chicks."#,
        week_number: 0,
        day_number: None,
        frequency: Once,
        category: Preparation,
        sort_order: 4,
    },
    SeedTask {
        title: "Prepare bedding",
        description: "Layer paper towels in brooder",
        detailed_content: r#"Cover bottom with paper towels (not newspaper - too slippery!). Paper towels allow you to monitor droppings and prevent chicks from eating bedding as they learn to identify proper food.

Have pine shavings ready for day 5."#,
        week_number: 0,
        day_number: None,
        frequency: Once,
        category: Preparation,
        sort_order: 5,
    },
    SeedTask {
        title: "Pre-warm brooder",
        description: "Run heat source for 24 hours before chicks arrive",
        detailed_content: r#"Temperature testing:
• Aim for 95°F at chick level under heat plate
• Ensure temperature gradient exists
• Test at multiple points in brooder
• Make adjustments as needed

Pre-warming ensures stable, consistent heat when chicks arrive."#,
        week_number: 0,
        day_number: None,
        frequency: Once,
        category: Preparation,
        sort_order: 6,
    },
    SeedTask {
        title: "Final preparations",
        description: "Complete day-before arrival tasks",
        detailed_content: r#"Day before arrival:
• Fill waterers with room-temp water + starter electrolytes
• Fill feeders with starter crumble
• Double-check heat source is working
• Prepare warm sugar water (1 tsp sugar to 1 cup water) for arrival day dipping
• Have paper towels ready for cleanup
• Pre-mix grit to sprinkle on feed on day 2"#,
        week_number: 0,
        day_number: None,
        frequency: Once,
        category: Preparation,
        sort_order: 7,
    },
    // Week 1: daily essentials
    SeedTask {
        title: "Check brooder temperature",
        description: "Maintain 95°F at chick level",
        detailed_content: r#"Trust your chicks:
• Huddled under heat = too cold
• Pressed against edges away from heat = too hot
• Comfortably scattered about = just right!

Adjust heat source height as needed."#,
        week_number: 1,
        day_number: None,
        frequency: Daily,
        category: BrooderCare,
        sort_order: 1,
    },
    SeedTask {
        title: "Fresh water - morning",
        description: "Clean and refill waterers",
        detailed_content: r#"Clean and refill waterers twice daily. Add a few marbles to the water tray to prevent drowning while chicks are small.

Check that all chicks can access water easily."#,
        week_number: 1,
        day_number: None,
        frequency: Daily,
        category: FeedingWater,
        sort_order: 2,
    },
    SeedTask {
        title: "Fresh water - evening",
        description: "Clean and refill waterers",
        detailed_content: r#"Evening water change. Check for debris and bedding in water. Ensure water level is appropriate for chick size."#,
        week_number: 1,
        day_number: None,
        frequency: Daily,
        category: FeedingWater,
        sort_order: 3,
    },
    SeedTask {
        title: "Check feed level",
        description: "Keep feeders full of starter crumble",
        detailed_content: r#"They're growing faster than sweet corn in July! Ensure feeders are always accessible and not blocked by bedding."#,
        week_number: 1,
        day_number: None,
        frequency: Daily,
        category: FeedingWater,
        sort_order: 4,
    },
    SeedTask {
        title: "Quick health scan",
        description: "Count chicks and check for alertness",
        detailed_content: r#"Take a minute to:
• Count your chicks
• Make sure everyone's moving about
• Check that all are eating
• Look for bright eyes

Note any concerns in your chicken journal."#,
        week_number: 1,
        day_number: None,
        frequency: Daily,
        category: HealthCheck,
        sort_order: 5,
    },
    // Week 1: day-pinned tasks
    SeedTask {
        title: "Welcome home - beak dipping",
        description: "Dip each chick's beak in water upon arrival",
        detailed_content: r#"When they arrive:
• Gently dip each chick's beak in water (not over nostrils!)
• Watch until each chick has found water and feed
• Keep visitors to a minimum today

This helps them find water in their new environment."#,
        week_number: 1,
        day_number: Some(1),
        frequency: Once,
        category: HealthCheck,
        sort_order: 10,
    },
    SeedTask {
        title: "Check for pasty butt",
        description: "Look for dried droppings stuck to vent",
        detailed_content: r#"Check each chick's bottom for pasty butt (dried droppings stuck to vent).

If found, clean gently with warm, damp cloth. Pat dry thoroughly. This is common in shipped chicks."#,
        week_number: 1,
        day_number: Some(1),
        frequency: Once,
        category: HealthCheck,
        sort_order: 11,
    },
    SeedTask {
        title: "Add grit to feed",
        description: "Sprinkle small amount of chick grit",
        detailed_content: r#"Sprinkle a tiny bit of chick grit in their feed (not too much!) to help their gizzards develop properly."#,
        week_number: 1,
        day_number: Some(2),
        frequency: Once,
        category: FeedingWater,
        sort_order: 12,
    },
    SeedTask {
        title: "Day 2 pasty butt check",
        description: "Check each chick's bottom again",
        detailed_content: r#"Check each chick's bottom for pasty butt again. This is still common in the first few days. Clean gently if needed."#,
        week_number: 1,
        day_number: Some(2),
        frequency: Once,
        category: HealthCheck,
        sort_order: 13,
    },
    SeedTask {
        title: "Observe eating and drinking",
        description: "Watch each chick eat and drink at least once",
        detailed_content: r#"Take time to observe each chick eating and drinking at least once. Note any chicks that seem reluctant or have difficulty.

Your chicks are starting to show personalities! Some may be bold explorers while others prefer watching from the sidelines."#,
        week_number: 1,
        day_number: Some(2),
        frequency: Once,
        category: HealthCheck,
        sort_order: 14,
    },
    SeedTask {
        title: "First partial bedding change",
        description: "Remove wet or soiled areas",
        detailed_content: r#"First bedding change - remove wet or soiled areas only. Keep some familiar bedding for comfort."#,
        week_number: 1,
        day_number: Some(3),
        frequency: Once,
        category: BrooderCare,
        sort_order: 15,
    },
    SeedTask {
        title: "Observe social interactions",
        description: "Watch for pecking order establishment",
        detailed_content: r#"Chicks are establishing their pecking order. Some gentle pecking is normal socialization, but watch for any chick being excessively picked on.

If bullying occurs, add a second feeder and waterer on the opposite side of the brooder."#,
        week_number: 1,
        day_number: Some(3),
        frequency: Once,
        category: HealthCheck,
        sort_order: 16,
    },
    SeedTask {
        title: "Check wing feather development",
        description: "Look for early wing feathers emerging",
        detailed_content: r#"Your chicks should be starting to sprout wing feathers. This is an exciting milestone! They're growing more coordinated and curious."#,
        week_number: 1,
        day_number: Some(4),
        frequency: Once,
        category: Milestone,
        sort_order: 17,
    },
    SeedTask {
        title: "Supervised playtime",
        description: "10 minutes outside brooder on a towel",
        detailed_content: r#"Allow 10 minutes of supervised "playtime" outside the brooder on a towel in a protected area. This helps with socialization and handling.

Keep the area warm and draft-free. Return chicks to brooder if they seem cold or stressed."#,
        week_number: 1,
        day_number: Some(5),
        frequency: Once,
        category: Environment,
        sort_order: 18,
    },
    SeedTask {
        title: "Transition to pine shavings",
        description: "Replace paper towels with pine shavings",
        detailed_content: r#"By day 5, chicks should be eating properly from feeders and are less likely to confuse bedding with food. Transition to 1-2 inches of pine shavings. NEVER use cedar!"#,
        week_number: 1,
        day_number: Some(5),
        frequency: Once,
        category: BrooderCare,
        sort_order: 19,
    },
    SeedTask {
        title: "Weekend complete brooder clean",
        description: "Full bedding replacement and brooder cleaning",
        detailed_content: r#"Complete brooder cleaning:
• Transfer chicks to temporary container
• Remove all bedding
• Clean entire brooder
• Add fresh bedding
• Return chicks

Do this at least once per week going forward."#,
        week_number: 1,
        day_number: Some(7),
        frequency: Once,
        category: BrooderCare,
        sort_order: 20,
    },
    SeedTask {
        title: "Week 1 milestone check",
        description: "Verify chicks are active, eating, and growing",
        detailed_content: r#"If your chicks are active, eating well, growing visibly, and developing their first proper feathers on their wings, congratulations! You've successfully navigated the most critical week of chick rearing."#,
        week_number: 1,
        day_number: Some(7),
        frequency: Once,
        category: Milestone,
        sort_order: 21,
    },
    // Week 2
    SeedTask {
        title: "Check brooder temperature",
        description: "Maintain 90°F at chick level",
        detailed_content: r#"Time to lower that heat! Reduce brooder temperature to 90°F this week. If using a heat plate, raise it up one notch.

Remember, your chicks will let you know if they're uncomfortable—huddling means too cold, panting and spreading out means too hot."#,
        week_number: 2,
        day_number: None,
        frequency: Daily,
        category: BrooderCare,
        sort_order: 1,
    },
    SeedTask {
        title: "Morning care routine",
        description: "Water, feed, health check, temperature",
        detailed_content: r#"Morning care checklist:
• Clean and refill waterers
• Top off feeders
• Quick health check—look for brightness, activity
• Temperature check
• Observe social interactions for 5 minutes"#,
        week_number: 2,
        day_number: None,
        frequency: Daily,
        category: FeedingWater,
        sort_order: 2,
    },
    SeedTask {
        title: "Evening care routine",
        description: "Water, feed, spot-clean bedding",
        detailed_content: r#"Evening care checklist:
• Clean and refill waterers again
• Check feed levels
• Spot-clean any very wet bedding areas
• Count your chicks (they're getting faster and trickier!)"#,
        week_number: 2,
        day_number: None,
        frequency: Daily,
        category: FeedingWater,
        sort_order: 3,
    },
    SeedTask {
        title: "Brooder refresh",
        description: "Complete bedding change and sanitize",
        detailed_content: r#"Complete bedding change:
• Replace all bedding with fresh pine shavings
• Clean waterers with warm, soapy water
• Sanitize feeders
• Wipe down brooder walls
• Weigh a few chicks to track growth"#,
        week_number: 2,
        day_number: Some(10),
        frequency: Once,
        category: BrooderCare,
        sort_order: 10,
    },
    SeedTask {
        title: "Brooder refresh",
        description: "Complete bedding change and sanitize",
        detailed_content: r#"Complete bedding change:
• Replace all bedding with fresh pine shavings
• Clean waterers with warm, soapy water
• Sanitize feeders
• Wipe down brooder walls
• Weigh a few chicks to track growth"#,
        week_number: 2,
        day_number: Some(14),
        frequency: Once,
        category: BrooderCare,
        sort_order: 11,
    },
    SeedTask {
        title: "Exploration time",
        description: "15-20 minutes supervised outside brooder",
        detailed_content: r#"Allow 15-20 minutes of supervised time outside the brooder:
• Create a small "playpen" with towel base and low walls
• Add a few new objects: small mirror (secured), rock, small branch
• Observe which chicks are boldest and which hang back"#,
        week_number: 2,
        day_number: Some(8),
        frequency: Once,
        category: Environment,
        sort_order: 12,
    },
    SeedTask {
        title: "Exploration time",
        description: "15-20 minutes supervised outside brooder",
        detailed_content: r#"Allow 15-20 minutes of supervised time outside the brooder:
• Create a small "playpen" with towel base and low walls
• Add a few new objects: small mirror (secured), rock, small branch
• Observe which chicks are boldest and which hang back"#,
        week_number: 2,
        day_number: Some(11),
        frequency: Once,
        category: Environment,
        sort_order: 13,
    },
    SeedTask {
        title: "Exploration time",
        description: "15-20 minutes supervised outside brooder",
        detailed_content: r#"Allow 15-20 minutes of supervised time outside the brooder:
• Create a small "playpen" with towel base and low walls
• Add a few new objects: small mirror (secured), rock, small branch
• Observe which chicks are boldest and which hang back"#,
        week_number: 2,
        day_number: Some(14),
        frequency: Once,
        category: Environment,
        sort_order: 14,
    },
    SeedTask {
        title: "Week 2 milestone check",
        description: "Verify growth and development progress",
        detailed_content: r#"By end of Week 2, your chicks should be:
• Noticeably larger with more defined wing feathers
• Active and alert, with clear eyes
• Moving confidently around their brooder
• Using all areas of the brooder, not just huddling under heat
• Beginning to establish a hierarchy"#,
        week_number: 2,
        day_number: Some(14),
        frequency: Once,
        category: Milestone,
        sort_order: 15,
    },
    // Week 3
    SeedTask {
        title: "Check brooder temperature",
        description: "Maintain 85°F at chick level",
        detailed_content: r#"Lower brooder temperature to 85°F. Your chicks are developing more feathers now and need less external heat. If using a heat plate, raise it another notch."#,
        week_number: 3,
        day_number: None,
        frequency: Daily,
        category: BrooderCare,
        sort_order: 1,
    },
    SeedTask {
        title: "Morning & evening care",
        description: "Water, feed, health check, bedding",
        detailed_content: r#"Morning & Evening essentials:
• Clean and refill waterers
• Check feed levels
• Quick health assessment
• Remove any wet bedding spots

Every third day: do a "deep clean" of one-third of the brooder (rotating sections)."#,
        week_number: 3,
        day_number: None,
        frequency: Daily,
        category: FeedingWater,
        sort_order: 2,
    },
    SeedTask {
        title: "Add starter perch",
        description: "Install low perch for practice",
        detailed_content: r#"If you haven't added a starter perch yet, now's the time! Keep it low (no more than 4 inches off the ground) and stable. Not all chicks will use it right away, but they should have the option."#,
        week_number: 3,
        day_number: Some(15),
        frequency: Once,
        category: Environment,
        sort_order: 10,
    },
    SeedTask {
        title: "Raise feeders and waterers",
        description: "Adjust height to chick back level",
        detailed_content: r#"Raise feeders and waterers so the top is level with the chicks' backs. This helps keep bedding out and reduces waste."#,
        week_number: 3,
        day_number: Some(15),
        frequency: Once,
        category: FeedingWater,
        sort_order: 11,
    },
    SeedTask {
        title: "First treat introduction",
        description: "Offer small amounts of fresh greens",
        detailed_content: r#"Offer very small amounts of finely chopped fresh greens:
• Try torn lettuce leaf, tender grass clippings, or chopped kale
• Just a handful for the whole brooder
• Treats should not exceed 10% of diet

Make sure grit is available when offering treats!"#,
        week_number: 3,
        day_number: Some(17),
        frequency: Once,
        category: FeedingWater,
        sort_order: 12,
    },
    SeedTask {
        title: "Extended playtime with dust bath",
        description: "20-30 minutes with dust bathing practice",
        detailed_content: r#"20-30 minutes of supervised time outside the brooder:
• Add a shallow dish with small amount of bedding for dust bathing practice
• Introduce one new texture each time (towel, patch of grass in tray, etc.)"#,
        week_number: 3,
        day_number: Some(16),
        frequency: Once,
        category: Environment,
        sort_order: 13,
    },
    SeedTask {
        title: "Extended playtime with dust bath",
        description: "20-30 minutes with dust bathing practice",
        detailed_content: r#"20-30 minutes of supervised time outside the brooder:
• Add a shallow dish with small amount of bedding for dust bathing practice
• Introduce one new texture each time (towel, patch of grass in tray, etc.)"#,
        week_number: 3,
        day_number: Some(19),
        frequency: Once,
        category: Environment,
        sort_order: 14,
    },
    SeedTask {
        title: "Extended playtime with dust bath",
        description: "20-30 minutes with dust bathing practice",
        detailed_content: r#"20-30 minutes of supervised time outside the brooder:
• Add a shallow dish with small amount of bedding for dust bathing practice
• Introduce one new texture each time (towel, patch of grass in tray, etc.)"#,
        week_number: 3,
        day_number: Some(21),
        frequency: Once,
        category: Environment,
        sort_order: 15,
    },
    SeedTask {
        title: "First training session",
        description: "Begin simple call training",
        detailed_content: r#"Begin simple call training for future free-ranging:
• Use a consistent sound (shaking treat container, specific whistle, or verbal call)
• Make the sound, then immediately offer a small treat
• Repeat for just 2-3 minutes—keep it short and positive!"#,
        week_number: 3,
        day_number: Some(20),
        frequency: Once,
        category: Environment,
        sort_order: 16,
    },
    SeedTask {
        title: "Week 3 milestone check",
        description: "Verify awkward phase development",
        detailed_content: r#"By end of Week 3, your chicks should be:
• Sporting a patchy mix of down and real feathers
• Using all available space in the brooder actively
• Attempting to perch (at least some of them)
• Showing more defined social structure
• Demonstrating distinct individual personalities
• Able to regulate body temperature better"#,
        week_number: 3,
        day_number: Some(21),
        frequency: Once,
        category: Milestone,
        sort_order: 17,
    },
    // Week 4
    SeedTask {
        title: "Check brooder temperature",
        description: "Maintain 80°F at chick level",
        detailed_content: r#"Lower brooder temperature to 80°F. Your chickens have substantial feathering now. Consider removing heat during the day if room temperature is above 70°F."#,
        week_number: 4,
        day_number: None,
        frequency: Daily,
        category: BrooderCare,
        sort_order: 1,
    },
    SeedTask {
        title: "Morning tasks",
        description: "Water, feed, bedding, observation",
        detailed_content: r#"Morning tasks:
• Fresh water with any supplements
• Check feed levels
• Remove any wet bedding
• Observe flock for 5 minutes—look for normal activity
• Open any covered areas for daytime light exposure"#,
        week_number: 4,
        day_number: None,
        frequency: Daily,
        category: FeedingWater,
        sort_order: 2,
    },
    SeedTask {
        title: "Evening tasks",
        description: "Water, feed, health check",
        detailed_content: r#"Evening tasks:
• Clean and refill waterers
• Top off feeders for overnight access
• Final health check—note any changes from morning
• Ensure heat source is functioning properly
• Close any covers for nighttime security if needed"#,
        week_number: 4,
        day_number: None,
        frequency: Daily,
        category: FeedingWater,
        sort_order: 3,
    },
    SeedTask {
        title: "Complete bedding refresh",
        description: "Replace 1/3 of bedding, rotating sections",
        detailed_content: r#"Replace 1/3 of bedding each time, rotating which section you clean (front, middle, back). This system keeps some familiar bedding while maintaining cleanliness."#,
        week_number: 4,
        day_number: Some(23),
        frequency: Once,
        category: BrooderCare,
        sort_order: 10,
    },
    SeedTask {
        title: "Complete bedding refresh",
        description: "Replace 1/3 of bedding, rotating sections",
        detailed_content: r#"Replace 1/3 of bedding each time, rotating which section you clean (front, middle, back). This system keeps some familiar bedding while maintaining cleanliness."#,
        week_number: 4,
        day_number: Some(26),
        frequency: Once,
        category: BrooderCare,
        sort_order: 11,
    },
    SeedTask {
        title: "Outdoor introduction",
        description: "30+ minutes in secure outdoor playpen",
        detailed_content: r#"On mild days (above 65°F), arrange a secure outdoor playpen:
• Start with 30 minutes, increasing by 10 minutes each session
• Provide shade, protection from wind, and escape from rain
• Always supervise completely
• Ensure area is absolutely predator-proof
• Return to brooder if birds seem stressed or weather changes"#,
        week_number: 4,
        day_number: Some(24),
        frequency: Once,
        category: Environment,
        sort_order: 12,
    },
    SeedTask {
        title: "Outdoor introduction",
        description: "30+ minutes in secure outdoor playpen",
        detailed_content: r#"On mild days (above 65°F), arrange a secure outdoor playpen:
• Increase from last session (aim for 40 minutes)
• Provide shade, protection from wind, and escape from rain
• Always supervise completely
• Ensure area is absolutely predator-proof
• Return to brooder if birds seem stressed or weather changes"#,
        week_number: 4,
        day_number: Some(27),
        frequency: Once,
        category: Environment,
        sort_order: 13,
    },
    SeedTask {
        title: "Upgrade feeders and waterers",
        description: "Switch to larger equipment if needed",
        detailed_content: r#"Switch to larger feeders and waterers if you haven't already. Hanging feeders work well at this stage if your brooder height allows. Aim to have the top at back height to minimize waste.

Consider adding apple cider vinegar (1 tbsp per gallon) for digestive health."#,
        week_number: 4,
        day_number: Some(22),
        frequency: Once,
        category: FeedingWater,
        sort_order: 14,
    },
    SeedTask {
        title: "Add varied perching options",
        description: "Different heights and diameters",
        detailed_content: r#"Add varied perching options at different heights (none higher than 8-12 inches). Use different diameters of perches to help their feet develop properly."#,
        week_number: 4,
        day_number: Some(22),
        frequency: Once,
        category: Environment,
        sort_order: 15,
    },
    SeedTask {
        title: "Week 4 milestone check",
        description: "Verify halfway point progress",
        detailed_content: r#"By end of Week 4, your chickens should be:
• Nearly fully feathered
• Active throughout the day with regular rest periods
• Using perches regularly
• Demonstrating proper dust bathing
• Showing breed-specific behaviors emerging
• Large enough that you're wondering where your tiny chicks went!"#,
        week_number: 4,
        day_number: Some(28),
        frequency: Once,
        category: Milestone,
        sort_order: 16,
    },
    // Week 5
    SeedTask {
        title: "Check brooder temperature",
        description: "Maintain 75°F at chick level",
        detailed_content: r#"Lower brooder temperature to 75°F. Many chicken keepers remove the heat source during the day at this point if room temperature is stable around 70°F, providing heat only at night."#,
        week_number: 5,
        day_number: None,
        frequency: Daily,
        category: BrooderCare,
        sort_order: 1,
    },
    SeedTask {
        title: "Morning care",
        description: "Water, feed, health assessment",
        detailed_content: r#"Morning care:
• Fresh water and feed check
• Brief health assessment of each bird
• Remove any wet or soiled bedding
• Open any ventilation panels for daytime"#,
        week_number: 5,
        day_number: None,
        frequency: Daily,
        category: FeedingWater,
        sort_order: 2,
    },
    SeedTask {
        title: "Evening routine",
        description: "Water, feed, wind-down",
        detailed_content: r#"Evening routine:
• Clean waterers thoroughly
• Check feed levels for overnight
• Quiet observation time—look for behavior changes
• Reduce light gradually for evening wind-down
• Ensure heat is available for nighttime if needed"#,
        week_number: 5,
        day_number: None,
        frequency: Daily,
        category: FeedingWater,
        sort_order: 3,
    },
    SeedTask {
        title: "Outdoor training session",
        description: "45-60 minutes with call training",
        detailed_content: r#"Outdoor training (45-60 minutes in secure area):
• Introduce a training call before each outdoor session
• Use the same call each time, followed by treat distribution
• Begin teaching them to return to the brooder using this call
• Add natural elements like small branches, safe plants, patches of dirt"#,
        week_number: 5,
        day_number: Some(29),
        frequency: Once,
        category: Environment,
        sort_order: 10,
    },
    SeedTask {
        title: "Outdoor training session",
        description: "45-60 minutes with call training",
        detailed_content: r#"Outdoor training (45-60 minutes in secure area):
• Use the same training call, followed by treat distribution
• Practice having them return to the brooder using this call
• Add natural elements like small branches, safe plants, patches of dirt"#,
        week_number: 5,
        day_number: Some(31),
        frequency: Once,
        category: Environment,
        sort_order: 11,
    },
    SeedTask {
        title: "Outdoor training session",
        description: "45-60 minutes with call training",
        detailed_content: r#"Outdoor training (45-60 minutes in secure area):
• Use the same training call, followed by treat distribution
• Practice having them return to the brooder using this call
• Add natural elements like small branches, safe plants, patches of dirt"#,
        week_number: 5,
        day_number: Some(33),
        frequency: Once,
        category: Environment,
        sort_order: 12,
    },
    SeedTask {
        title: "Coop introduction visit",
        description: "15-30 minutes supervised in coop",
        detailed_content: r#"If your coop is ready, take birds for a supervised visit:
• Start with 15-30 minutes in the enclosed coop
• Show them water and feed locations
• Let them explore while you observe
• Return to brooder before they become stressed"#,
        week_number: 5,
        day_number: Some(30),
        frequency: Once,
        category: Environment,
        sort_order: 13,
    },
    SeedTask {
        title: "Coop introduction visit",
        description: "15-30 minutes supervised in coop",
        detailed_content: r#"Continue coop familiarization:
• Let them explore longer if comfortable
• Show them water and feed locations again
• Observe how they interact with the space
• Return to brooder before they become stressed"#,
        week_number: 5,
        day_number: Some(32),
        frequency: Once,
        category: Environment,
        sort_order: 14,
    },
    SeedTask {
        title: "Provide free-choice grit",
        description: "Set up separate grit container",
        detailed_content: r#"If you're introducing more treats and outdoor time, make sure proper poultry grit is available free-choice in a separate container. This helps them digest the variety of foods they're now eating."#,
        week_number: 5,
        day_number: Some(29),
        frequency: Once,
        category: FeedingWater,
        sort_order: 15,
    },
    SeedTask {
        title: "Begin reducing night lighting",
        description: "Help chicks learn day/night cycles",
        detailed_content: r#"If you've been providing night lighting, begin reducing it gradually. Chickens need to learn about day/night cycles before coop transition."#,
        week_number: 5,
        day_number: Some(30),
        frequency: Once,
        category: Environment,
        sort_order: 16,
    },
    SeedTask {
        title: "Coop preparation checklist",
        description: "Ensure coop is 100% ready",
        detailed_content: r#"Use this time to ensure your coop is 100% ready:
□ Predator-proof enclosure (hardware cloth, not chicken wire)
□ Appropriate-sized roosting bars (2" diameter)
□ Proper ventilation without drafts
□ Weather protection
□ Feeder and waterer locations prepared
□ Nest boxes blocked off (too young to need them yet)
□ Deep bedding in place (4-6" pine shavings)
□ Dust bathing area established
□ Secure run attached to coop
□ Shade available in outdoor areas"#,
        week_number: 5,
        day_number: Some(35),
        frequency: Once,
        category: Preparation,
        sort_order: 17,
    },
    SeedTask {
        title: "Week 5 milestone check",
        description: "Verify pre-coop readiness",
        detailed_content: r#"By end of Week 5, your chickens should be:
• Looking like miniature adult chickens
• Fully feathered with developing combs
• Comfortable with supervised outdoor time
• Responding to basic training cues
• Self-regulating temperature well
• Dust bathing independently
• Showing interest in foraging behaviors
• Developing breed-specific traits"#,
        week_number: 5,
        day_number: Some(35),
        frequency: Once,
        category: Milestone,
        sort_order: 18,
    },
];
