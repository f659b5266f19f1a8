use crate::feedback::Field;

/// How a question's scale is drawn next to the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    /// One face per step, indexed from `min`.
    Emoji(&'static [&'static str]),
    /// Detractor/passive/promoter faces chosen from the value.
    NpsFaces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub field: Field,
    pub label: &'static str,
    pub description: &'static str,
    pub scale: Scale,
}

impl Question {
    pub fn min(&self) -> i64 {
        i64::from(self.field.bounds().0)
    }

    pub fn max(&self) -> i64 {
        i64::from(self.field.bounds().1)
    }

    /// Face shown for `value`, if the value is on the scale.
    pub fn face(&self, value: i64) -> Option<&'static str> {
        match self.scale {
            Scale::Emoji(faces) => {
                let index = usize::try_from(value - self.min()).ok()?;
                faces.get(index).copied()
            }
            Scale::NpsFaces => match value {
                0..=6 => Some("☹"),
                7..=8 => Some("😐"),
                9..=10 => Some("🙂"),
                _ => None,
            },
        }
    }
}

pub static QUESTIONS: [Question; 3] = [
    Question {
        field: Field::Satisfaction,
        label: "How satisfied are you with our service?",
        description: "Rate your overall satisfaction with our product or service",
        scale: Scale::Emoji(&["😞", "😐", "🙂", "😊", "🤩"]),
    },
    Question {
        field: Field::EaseOfUse,
        label: "How easy was it to use our product?",
        description: "Rate the user-friendliness and ease of navigation",
        scale: Scale::Emoji(&["😤", "😕", "😊", "😄", "🎉"]),
    },
    Question {
        field: Field::Nps,
        label: "How likely are you to recommend us?",
        description: "On a scale of 0-10, how likely are you to recommend us to others?",
        scale: Scale::NpsFaces,
    },
];

pub fn question(field: Field) -> &'static Question {
    match field {
        Field::Satisfaction => &QUESTIONS[0],
        Field::EaseOfUse => &QUESTIONS[1],
        Field::Nps => &QUESTIONS[2],
    }
}
