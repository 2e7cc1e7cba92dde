use serde::{Deserialize, Serialize};

/// Черты участника, влияющие на раздачу.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Traits {
    /// Стремительность (`-q`): добирать, пока карта 5 или ниже.
    pub quick: bool,
    /// Хладнокровие (`-l`): тянуть 2 карты.
    pub level_headed: bool,
    /// Хладнокровие+ (`-i`): тянуть 3 карты.
    pub improved_level_headed: bool,
    /// Медлительность (`-h`): минимум 2 карты, берётся худшая.
    pub hesitant: bool,
}

/// Какое поле `Traits` включает суффикс.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flag {
    Quick,
    LevelHeaded,
    ImprovedLevelHeaded,
    Hesitant,
}

/// Суффиксы черт в токене `Имя[-флаг]*`.
const FLAG_MARKERS: [(&str, Flag); 4] = [
    ("-q", Flag::Quick),
    ("-l", Flag::LevelHeaded),
    ("-i", Flag::ImprovedLevelHeaded),
    ("-h", Flag::Hesitant),
];

impl Traits {
    fn set(&mut self, flag: Flag) {
        match flag {
            Flag::Quick => self.quick = true,
            Flag::LevelHeaded => self.level_headed = true,
            Flag::ImprovedLevelHeaded => self.improved_level_headed = true,
            Flag::Hesitant => self.hesitant = true,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Traits::default()
    }

    /// Базовое число карт: хладнокровие+ → 3, хладнокровие → 2, иначе 1.
    pub fn base_draw_count(&self) -> usize {
        if self.improved_level_headed {
            3
        } else if self.level_headed {
            2
        } else {
            1
        }
    }

    /// Названия черт для таблицы инициативы, через запятую.
    pub fn display_names(&self) -> String {
        let mut active = Vec::new();
        if self.quick {
            active.push("стремительность");
        }
        if self.improved_level_headed {
            active.push("хладнокровие+");
        } else if self.level_headed {
            active.push("хладнокровие");
        }
        if self.hesitant {
            active.push("медлительность");
        }
        active.join(", ")
    }
}

/// Разобрать токен `Имя[-флаг]*` на имя и черты.
///
/// Суффиксы срезаются с конца в любом порядке, пока хоть один совпадает.
/// Повторный флаг ничего не меняет. Пустое имя — допустимый результат,
/// решать, что с ним делать, вызывающему коду.
pub fn parse_participant(token: &str) -> (String, Traits) {
    let mut name = token;
    let mut traits = Traits::default();

    while let Some((rest, flag)) = FLAG_MARKERS
        .iter()
        .find_map(|(marker, flag)| name.strip_suffix(marker).map(|rest| (rest, *flag)))
    {
        traits.set(flag);
        name = rest;
    }

    (name.trim().to_string(), traits)
}
