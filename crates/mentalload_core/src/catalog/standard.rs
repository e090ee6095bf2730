//! Built-in task list.

use crate::model::task::{CognitiveTask, PhysicalTask, Task, TaskCategory, TaskRequirement};

fn physical(
    id: &str,
    title: &str,
    category: TaskCategory,
    baseline_minutes_per_week: u32,
    requirement: TaskRequirement,
) -> Task {
    Task::Physical(PhysicalTask {
        id: id.to_string(),
        title: title.to_string(),
        category,
        baseline_minutes_per_week,
        requirement,
    })
}

fn cognitive(
    id: &str,
    title: &str,
    category: TaskCategory,
    baseline_minutes_per_week: u32,
    mental_load_weight: f64,
    requirement: TaskRequirement,
) -> Task {
    Task::Cognitive(CognitiveTask {
        id: id.to_string(),
        title: title.to_string(),
        category,
        baseline_minutes_per_week,
        mental_load_weight,
        requirement,
    })
}

pub(super) fn standard_tasks() -> Vec<Task> {
    use TaskCategory::*;
    use TaskRequirement::{Always, Children, Employment, Garden};

    vec![
        physical("cook_meals", "Cooking daily meals", Cooking, 420, Always),
        physical("dishes", "Washing dishes / loading dishwasher", Cooking, 210, Always),
        physical("pack_lunches", "Packing lunches", Cooking, 70, Children),
        physical("vacuum_mop", "Vacuuming and mopping", Cleaning, 90, Always),
        physical("bathrooms", "Cleaning bathrooms", Cleaning, 60, Always),
        physical("tidy_up", "Daily tidying", Cleaning, 105, Always),
        physical("bins_recycling", "Taking out bins and recycling", Cleaning, 20, Always),
        physical("laundry_wash", "Washing and drying laundry", Laundry, 120, Always),
        physical("laundry_fold", "Folding and putting away clothes", Laundry, 60, Always),
        physical("groceries", "Grocery shopping", Shopping, 90, Always),
        physical("errands", "Running errands", Shopping, 60, Always),
        physical("school_runs", "School and activity drop-offs", Childcare, 150, Children),
        physical("bedtime", "Bath and bedtime routine", Childcare, 210, Children),
        physical("homework_help", "Helping with homework", Childcare, 120, Children),
        physical("pet_feeding", "Feeding and walking pets", Pets, 210, TaskRequirement::Pets),
        physical("vet_grooming", "Vet visits and grooming", Pets, 20, TaskRequirement::Pets),
        physical("lawn_garden", "Lawn and garden work", Outdoor, 90, Garden),
        physical("repairs", "Small repairs and DIY", Maintenance, 45, Always),
        physical("car_care", "Car maintenance and cleaning", Maintenance, 20, Always),
        physical("pay_bills", "Paying bills", Finances, 20, Always),
        cognitive("meal_planning", "Planning meals and menus", Planning, 60, 1.5, Always),
        cognitive("shopping_lists", "Keeping shopping lists current", Planning, 30, 1.2, Always),
        cognitive("family_calendar", "Managing the family calendar", Planning, 45, 1.8, Always),
        cognitive("holiday_planning", "Planning holidays and celebrations", Planning, 30, 1.5, Always),
        cognitive("household_supplies", "Noticing when supplies run low", Monitoring, 20, 1.3, Always),
        cognitive("home_upkeep_watch", "Noticing what needs fixing or cleaning", Monitoring, 20, 1.3, Always),
        cognitive("budget_tracking", "Tracking budget and spending", Finances, 45, 1.6, Always),
        cognitive("childcare_arrangements", "Arranging childcare and babysitters", Anticipating, 45, 2.0, Children),
        cognitive("school_admin", "School forms, events and communication", Anticipating, 40, 1.8, Children),
        cognitive("kids_wellbeing", "Monitoring children's wellbeing and development", EmotionalLabor, 60, 2.0, Children),
        cognitive("health_appointments", "Booking medical and dental appointments", Anticipating, 20, 1.7, Always),
        cognitive("pet_health_watch", "Keeping track of pet health and supplies", Monitoring, 15, 1.2, TaskRequirement::Pets),
        cognitive("work_schedule_juggling", "Coordinating work schedules with home needs", Anticipating, 30, 1.6, Employment),
        cognitive("family_emotions", "Managing family moods and conflicts", EmotionalLabor, 60, 2.0, Always),
        cognitive("gifts_social", "Remembering birthdays, gifts and invitations", SocialCoordination, 30, 1.5, Always),
        cognitive("relatives_contact", "Staying in touch with relatives", SocialCoordination, 30, 1.4, Always),
    ]
}
