use super::{BenefitCategory, BenefitDefinition, MilestoneDefinition};

use BenefitCategory::{Body, Heart, Lung, Mind, Sex};

const MINUTE: f64 = 1.0 / 1440.0;
const HOUR: f64 = 1.0 / 24.0;
const WEEK: f64 = 7.0;
const MONTH: f64 = 30.0;
const YEAR: f64 = 365.0;

const fn milestone(target_days: f64, percent: u8, label: &'static str) -> MilestoneDefinition {
    MilestoneDefinition {
        target_days,
        cumulative_progress_percent: percent,
        label,
    }
}

const fn benefit(
    name: &'static str,
    category: BenefitCategory,
    timeframe: &'static str,
    target_days: f64,
    details: &'static str,
) -> BenefitDefinition {
    BenefitDefinition {
        name,
        category,
        timeframe,
        target_days,
        details,
    }
}

/// Aggregate recovery curve. Must stay sorted ascending by `target_days`.
pub static HEALTH_MILESTONES: &[MilestoneDefinition] = &[
    milestone(20.0 * MINUTE, 2, "Heart rate and blood pressure drop"),
    milestone(8.0 * HOUR, 5, "Oxygen levels return to normal"),
    milestone(12.0 * HOUR, 7, "Carbon monoxide level drops to normal"),
    milestone(1.0, 10, "Heart attack risk begins to decrease"),
    milestone(2.0, 13, "Nerve endings regrow, taste and smell improve"),
    milestone(3.0, 16, "Nicotine is out of the body"),
    milestone(1.0 * WEEK, 20, "Breathing becomes easier"),
    milestone(2.0 * WEEK, 25, "Circulation improves"),
    milestone(1.0 * MONTH, 40, "Lung function increases"),
    milestone(3.0 * MONTH, 55, "Lung function up to 30% better"),
    milestone(9.0 * MONTH, 65, "Cilia regrow and coughing decreases"),
    milestone(1.0 * YEAR, 75, "Coronary heart disease risk is halved"),
    milestone(5.0 * YEAR, 90, "Stroke risk falls to that of a non-smoker"),
    milestone(10.0 * YEAR, 100, "Lung cancer death rate is halved"),
];

/// Individual benefits. Unordered; present through `benefits_sorted`.
#[rustfmt::skip]
pub static BENEFITS: &[BenefitDefinition] = &[
    // Heart
    benefit("Blood Pressure Drops", Heart, "20 minutes", 20.0 * MINUTE,
        "Blood pressure falls back toward its pre-cigarette level."),
    benefit("Pulse Rate Normalizes", Heart, "20 minutes", 20.0 * MINUTE,
        "Your heart no longer races from the last dose of nicotine."),
    benefit("Blood Oxygen Normalizes", Heart, "8 hours", 8.0 * HOUR,
        "Oxygen saturation in the blood returns to a normal range."),
    benefit("Heart Attack Risk Begins to Fall", Heart, "24 hours", 1.0,
        "Less carbon monoxide and nicotine means less strain on the heart."),
    benefit("Circulation Improves", Heart, "2 weeks", 2.0 * WEEK,
        "Blood flows more freely to your muscles, skin and extremities."),
    benefit("Platelet Stickiness Falls", Heart, "2 weeks", 2.0 * WEEK,
        "Blood becomes less prone to forming dangerous clots."),
    benefit("Arteries Less Constricted", Heart, "1 month", 1.0 * MONTH,
        "Blood vessels dilate more easily in response to demand."),
    benefit("Resting Heart Rate Lower", Heart, "1 month", 1.0 * MONTH,
        "Your heart does the same work with fewer beats."),
    benefit("HDL Cholesterol Rises", Heart, "6 weeks", 6.0 * WEEK,
        "Protective cholesterol climbs back toward healthy levels."),
    benefit("Exercise Heart Rate Improves", Heart, "3 months", 3.0 * MONTH,
        "Your heart copes better with physical effort."),
    benefit("Coronary Heart Disease Risk Halved", Heart, "1 year", 1.0 * YEAR,
        "The excess risk of coronary heart disease is half that of a smoker."),
    benefit("Peripheral Artery Disease Risk Falls", Heart, "2 years", 2.0 * YEAR,
        "Narrowing of the arteries in the legs becomes much less likely."),
    benefit("Stroke Risk Reduced", Heart, "5 years", 5.0 * YEAR,
        "Stroke risk can fall to that of a non-smoker."),
    benefit("Heart Failure Risk Falls", Heart, "5 years", 5.0 * YEAR,
        "The heart muscle is under far less long-term stress."),
    benefit("Aortic Aneurysm Risk Falls", Heart, "10 years", 10.0 * YEAR,
        "The main artery is less likely to weaken and bulge."),
    benefit("Heart Disease Risk Matches Non-Smoker", Heart, "15 years", 15.0 * YEAR,
        "Your risk of coronary heart disease is that of someone who never smoked."),
    // Lung
    benefit("Oxygen Intake Improves", Lung, "8 hours", 8.0 * HOUR,
        "Lungs absorb oxygen without competing with carbon monoxide."),
    benefit("Mucus Begins to Clear", Lung, "2 days", 2.0,
        "The lungs start pushing out accumulated mucus and debris."),
    benefit("Bronchial Tubes Relax", Lung, "3 days", 3.0,
        "Airways loosen, making each breath a little easier."),
    benefit("Breathing Becomes Easier", Lung, "3 days", 3.0,
        "Lung capacity starts to increase as airways open."),
    benefit("Lung Volume Increases", Lung, "2 weeks", 2.0 * WEEK,
        "More air moves in and out with every breath."),
    benefit("Cilia Begin to Recover", Lung, "1 month", 1.0 * MONTH,
        "The tiny hairs that sweep the airways start working again."),
    benefit("Coughing Decreases", Lung, "1 month", 1.0 * MONTH,
        "As the airways clear, coughing becomes less frequent."),
    benefit("Shortness of Breath Decreases", Lung, "1 month", 1.0 * MONTH,
        "Stairs and brisk walks leave you less winded."),
    benefit("Lung Inflammation Decreases", Lung, "1 month", 1.0 * MONTH,
        "Irritation of the airway lining settles down."),
    benefit("Oxygen Uptake During Exercise Improves", Lung, "6 weeks", 6.0 * WEEK,
        "Working muscles get more oxygen when you exert yourself."),
    benefit("Asthma Symptoms Ease", Lung, "2 months", 2.0 * MONTH,
        "Asthma attacks tend to become milder and less frequent."),
    benefit("Lung Function Up 30%", Lung, "3 months", 3.0 * MONTH,
        "Measured lung function can improve by up to 30 percent."),
    benefit("Fewer Respiratory Infections", Lung, "3 months", 3.0 * MONTH,
        "Colds and chest infections become less common."),
    benefit("Wheezing Reduced", Lung, "6 months", 6.0 * MONTH,
        "Whistling breath on exertion largely disappears."),
    benefit("Chronic Cough Resolves", Lung, "6 months", 6.0 * MONTH,
        "The persistent smoker's cough fades away."),
    benefit("Cilia Fully Regrown", Lung, "9 months", 9.0 * MONTH,
        "Airways clean themselves effectively again."),
    benefit("Sinus Congestion Clears", Lung, "9 months", 9.0 * MONTH,
        "Nasal passages and sinuses stay clear more easily."),
    benefit("Airway Irritation Subsides", Lung, "1 year", 1.0 * YEAR,
        "Tar residue is gradually cleared from the airways."),
    benefit("COPD Progression Slows", Lung, "1 year", 1.0 * YEAR,
        "The decline in lung function slows to a normal, age-related rate."),
    benefit("Lung Cancer Risk Halved", Lung, "10 years", 10.0 * YEAR,
        "The risk of dying from lung cancer is about half that of a smoker."),
    benefit("Lung Cancer Risk Continues Falling", Lung, "15 years", 15.0 * YEAR,
        "Lung cancer risk keeps approaching that of a non-smoker."),
    // Body
    benefit("Fresh Breath", Body, "Immediate", 0.0,
        "No more stale smoke on your breath."),
    benefit("No More Smoke Smell", Body, "Immediate", 0.0,
        "Your hair, clothes and home stop absorbing smoke."),
    benefit("Hands and Feet Warm Up", Body, "20 minutes", 20.0 * MINUTE,
        "Better circulation warms your extremities."),
    benefit("Carbon Monoxide Levels Normalize", Body, "12 hours", 12.0 * HOUR,
        "Carbon monoxide in the blood drops to normal."),
    benefit("Sense of Taste Returns", Body, "2 days", 2.0,
        "Taste buds recover and food starts to taste better."),
    benefit("Sense of Smell Returns", Body, "2 days", 2.0,
        "Damaged nerve endings in the nose begin to heal."),
    benefit("Nerve Endings Regrow", Body, "2 days", 2.0,
        "Nerve endings damaged by smoking begin to regenerate."),
    benefit("Nicotine Leaves the Body", Body, "3 days", 3.0,
        "Your body is now completely nicotine-free."),
    benefit("Blood Sugar Stabilizes", Body, "1 week", 1.0 * WEEK,
        "Insulin sensitivity starts to improve."),
    benefit("Teeth Stop Staining", Body, "1 week", 1.0 * WEEK,
        "No new tar stains build up on your teeth."),
    benefit("Gum Circulation Improves", Body, "2 weeks", 2.0 * WEEK,
        "Gums receive more blood and become healthier."),
    benefit("Walking Becomes Easier", Body, "2 weeks", 2.0 * WEEK,
        "Better circulation makes walking and light exercise easier."),
    benefit("Skin Hydration Improves", Body, "3 weeks", 3.0 * WEEK,
        "Skin holds moisture better as circulation improves."),
    benefit("Energy Levels Increase", Body, "3 weeks", 3.0 * WEEK,
        "More oxygen means less fatigue during the day."),
    benefit("Skin Tone Improves", Body, "1 month", 1.0 * MONTH,
        "Complexion becomes brighter and more even."),
    benefit("Wounds Heal Faster", Body, "1 month", 1.0 * MONTH,
        "Improved blood supply speeds up healing."),
    benefit("Stomach Ulcer Risk Falls", Body, "1 month", 1.0 * MONTH,
        "The stomach lining is less exposed to irritants."),
    benefit("Physical Endurance Improves", Body, "6 weeks", 6.0 * WEEK,
        "You can keep going for longer during exercise."),
    benefit("Immune System Strengthens", Body, "3 months", 3.0 * MONTH,
        "White blood cells work more effectively against infection."),
    benefit("Fingernail Stains Fade", Body, "3 months", 3.0 * MONTH,
        "Yellow stains grow out of your nails."),
    benefit("Bone Density Stabilizes", Body, "6 months", 6.0 * MONTH,
        "Bone loss linked to smoking slows down."),
    benefit("Type 2 Diabetes Risk Falls", Body, "1 year", 1.0 * YEAR,
        "Risk of developing type 2 diabetes starts to decline."),
    benefit("Mouth and Throat Cancer Risk Halved", Body, "5 years", 5.0 * YEAR,
        "Risk of cancers of the mouth and throat is cut in half."),
    benefit("Esophageal Cancer Risk Halved", Body, "5 years", 5.0 * YEAR,
        "Risk of cancer of the esophagus is cut in half."),
    benefit("Cervical Cancer Risk Falls", Body, "5 years", 5.0 * YEAR,
        "Risk of cervical cancer drops to that of a non-smoker."),
    benefit("Cataract Risk Falls", Body, "5 years", 5.0 * YEAR,
        "Eyes are less likely to develop cataracts."),
    benefit("Bladder Cancer Risk Halved", Body, "10 years", 10.0 * YEAR,
        "Risk of bladder cancer is about half that of a smoker."),
    benefit("Kidney Cancer Risk Falls", Body, "10 years", 10.0 * YEAR,
        "Risk of kidney cancer declines markedly."),
    benefit("Pancreatic Cancer Risk Falls", Body, "10 years", 10.0 * YEAR,
        "Risk of pancreatic cancer approaches that of a non-smoker."),
    benefit("Tooth Loss Risk Falls", Body, "10 years", 10.0 * YEAR,
        "Gum disease and tooth loss become much less likely."),
    benefit("Macular Degeneration Risk Falls", Body, "10 years", 10.0 * YEAR,
        "Age-related vision loss becomes less likely."),
    benefit("Life Expectancy Approaches Non-Smoker", Body, "15 years", 15.0 * YEAR,
        "Most of the life expectancy lost to smoking has been regained."),
    // Sex
    benefit("Better-Tasting Kisses", Sex, "Immediate", 0.0,
        "Your partner no longer tastes smoke."),
    benefit("Increased Sensitivity", Sex, "1 week", 1.0 * WEEK,
        "Regrowing nerve endings heighten physical sensation."),
    benefit("Improved Libido", Sex, "2 weeks", 2.0 * WEEK,
        "Better circulation and hormone balance boost sexual desire."),
    benefit("Erectile Function Improves", Sex, "3 weeks", 3.0 * WEEK,
        "Improved blood flow supports sexual function."),
    benefit("Greater Sexual Stamina", Sex, "1 month", 1.0 * MONTH,
        "Better lung and heart function mean more endurance."),
    benefit("Fertility Improves", Sex, "3 months", 3.0 * MONTH,
        "Conception becomes easier for both partners."),
    benefit("Sperm Quality Improves", Sex, "3 months", 3.0 * MONTH,
        "A new generation of healthier sperm has been produced."),
    benefit("Hormone Balance Restores", Sex, "3 months", 3.0 * MONTH,
        "Sex hormone levels move back toward normal."),
    benefit("Healthier Pregnancy Odds", Sex, "1 year", 1.0 * YEAR,
        "Risks of complications in pregnancy are reduced."),
    benefit("Early Menopause Risk Falls", Sex, "1 year", 1.0 * YEAR,
        "Smoking-related early menopause becomes less likely."),
    // Mind
    benefit("Sense of Achievement", Mind, "Immediate", 0.0,
        "You made the decision to quit. That counts."),
    benefit("Cravings Peak and Begin to Fade", Mind, "3 days", 3.0,
        "Withdrawal is at its strongest and starts easing from here."),
    benefit("Cravings Less Frequent", Mind, "2 weeks", 2.0 * WEEK,
        "Urges to smoke become shorter and further apart."),
    benefit("Better Sleep", Mind, "3 weeks", 3.0 * WEEK,
        "Sleep becomes deeper once nicotine withdrawal settles."),
    benefit("Irritability Fades", Mind, "1 month", 1.0 * MONTH,
        "Mood swings from withdrawal subside."),
    benefit("Improved Concentration", Mind, "1 month", 1.0 * MONTH,
        "Focus returns without the nicotine cycle."),
    benefit("Anxiety Levels Fall", Mind, "6 weeks", 6.0 * WEEK,
        "Baseline anxiety drops below what it was while smoking."),
    benefit("Mood Improves", Mind, "3 months", 3.0 * MONTH,
        "Overall mood and life satisfaction rise."),
    benefit("Depression Risk Falls", Mind, "6 months", 6.0 * MONTH,
        "Quitting is associated with lower rates of depression."),
    benefit("Stress Levels Reduced", Mind, "6 months", 6.0 * MONTH,
        "Without the craving cycle, everyday stress is easier to manage."),
    benefit("New Identity as a Non-Smoker", Mind, "1 year", 1.0 * YEAR,
        "Smoking no longer feels like part of who you are."),
    benefit("Dementia Risk Falls", Mind, "5 years", 5.0 * YEAR,
        "Risk of cognitive decline moves toward that of a non-smoker."),
];
