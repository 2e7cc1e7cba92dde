// src/engine/round.rs

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::participant::RoundEntry;
use crate::domain::traits::{parse_participant, Traits};
use crate::engine::dealing::deal_cards;
use crate::engine::{EngineError, RandomSource};
use crate::infra::config::DEFAULT_RESHUFFLE_THRESHOLD;

/// Итог команды раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DealReport {
    /// Записи в порядке токенов (повторное имя встречается дважды).
    pub dealt: Vec<RoundEntry>,
    /// Сколько карт осталось в доборе.
    pub remaining: usize,
}

/// Строка таблицы инициативы.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct InitiativeRow {
    pub name: String,
    pub traits: Traits,
    pub active: Card,
    pub drawn: Vec<Card>,
    pub on_hold: bool,
}

/// Порядок хода: строки отсортированы по активной карте, старшая первой.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct InitiativeView {
    pub round_number: u32,
    pub remaining: usize,
    pub rows: Vec<InitiativeRow>,
}

impl InitiativeView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RedrawReport {
    pub name: String,
    pub card: Card,
}

/// Итог перехода к новому раунду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewRoundReport {
    pub round_number: u32,
    pub carried_over: bool,
    /// Была ли колода перетасована на границе раунда.
    pub reshuffled: bool,
    /// Перенесённые участники с новыми картами, в исходном порядке.
    pub redealt: Vec<RoundEntry>,
    pub remaining: usize,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DropReport {
    pub removed: Vec<String>,
    /// Имена без записи в раунде. Состояние они не меняют.
    pub unknown: Vec<String>,
}

/// Изменение холда одного участника.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HoldChange {
    /// Поставлен на холд (ожидает).
    Held(String),
    /// Снят с холда (действует).
    Released(String),
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HoldReport {
    /// Изменения в порядке токенов.
    pub changes: Vec<HoldChange>,
}

/// Состояние инициативы одной сессии (одного сервера / группы).
///
/// Владеет колодой, записями раунда, множеством «на холде» и номером раунда.
/// Команды одной сессии должны выполняться строго по очереди.
#[derive(Debug)]
pub struct InitiativeState<R: RandomSource> {
    deck: Deck,
    /// Записи раунда в порядке добавления (важно для переноса в новый раунд).
    entries: Vec<RoundEntry>,
    on_hold: HashSet<String>,
    round_number: u32,
    /// Ниже этого остатка колода тасуется при смене раунда.
    reshuffle_threshold: usize,
    rng: R,
}

impl<R: RandomSource> InitiativeState<R> {
    /// Новая сессия: перетасованная колода, раунд 0, участников нет.
    pub fn new(rng: R) -> Self {
        Self::with_threshold(rng, DEFAULT_RESHUFFLE_THRESHOLD)
    }

    pub fn with_threshold(mut rng: R, reshuffle_threshold: usize) -> Self {
        let deck = Deck::shuffled(&mut rng);
        Self {
            deck,
            entries: Vec::new(),
            on_hold: HashSet::new(),
            round_number: 0,
            reshuffle_threshold,
            rng,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Доступ к колоде для тестов и реплеев (например, «догнать» остаток).
    pub fn deck_and_rng_mut(&mut self) -> (&mut Deck, &mut R) {
        (&mut self.deck, &mut self.rng)
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn entries(&self) -> &[RoundEntry] {
        &self.entries
    }

    pub fn entry(&self, name: &str) -> Option<&RoundEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn is_on_hold(&self, name: &str) -> bool {
        self.on_hold.contains(name)
    }

    /// Начать бой: свежая перетасованная колода, раунд 1.
    pub fn start_fight(&mut self) {
        let deck = Deck::shuffled(&mut self.rng);
        self.start_fight_with_deck(deck);
    }

    /// Начать бой с заранее подготовленной колодой.
    pub fn start_fight_with_deck(&mut self, deck: Deck) {
        self.deck = deck;
        self.deck.reset_joker_flag();
        self.entries.clear();
        self.on_hold.clear();
        self.round_number = 1;
        info!(remaining = self.deck.remaining(), "fight started");
    }

    /// Раздать карты по токенам `Имя[-флаг]*` в порядке ввода.
    ///
    /// Старая запись и холд имени снимаются, раздача повторяется заново.
    /// Токены с пустым именем пропускаются.
    pub fn deal<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<DealReport, EngineError> {
        let mut dealt = Vec::with_capacity(tokens.len());

        for token in tokens {
            let (name, traits) = parse_participant(token.as_ref());
            if name.is_empty() {
                continue;
            }

            self.remove_entry(&name);
            self.on_hold.remove(&name);

            let entry = self.deal_to(name, traits)?;
            dealt.push(entry);
        }

        Ok(DealReport {
            dealt,
            remaining: self.deck.remaining(),
        })
    }

    /// Таблица инициативы, старшая карта первой.
    pub fn show(&self) -> InitiativeView {
        let mut rows: Vec<InitiativeRow> = self
            .entries
            .iter()
            .map(|e| InitiativeRow {
                name: e.name.clone(),
                traits: e.traits,
                active: e.active,
                drawn: e.drawn.clone(),
                on_hold: self.on_hold.contains(&e.name),
            })
            .collect();

        // Стабильная сортировка: равные карты (два Джокера) сохраняют порядок раздачи.
        rows.sort_by(|a, b| b.active.cmp(&a.active));

        InitiativeView {
            round_number: self.round_number,
            remaining: self.deck.remaining(),
            rows,
        }
    }

    /// Одна новая карта без учёта черт. Черты записи сохраняются.
    pub fn redraw(&mut self, name: &str) -> Result<RedrawReport, EngineError> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.name == name)
            .ok_or_else(|| EngineError::ParticipantNotFound(name.to_string()))?;

        let card = self.deck.draw(&mut self.rng)?;
        let entry = &mut self.entries[idx];
        entry.active = card;
        entry.drawn = vec![card];

        debug!(name, %card, "redraw");
        Ok(RedrawReport {
            name: name.to_string(),
            card,
        })
    }

    /// Следующий раунд.
    ///
    /// При `carry_over` участники не из `exclusions` получают новые карты
    /// с теми же чертами. Колода тасуется, если в раунде выходил Джокер
    /// или в доборе осталось меньше порога.
    pub fn advance_round(
        &mut self,
        carry_over: bool,
        exclusions: &HashSet<String>,
    ) -> Result<NewRoundReport, EngineError> {
        self.round_number += 1;

        let mut to_keep: Vec<(String, Traits)> = Vec::new();
        if carry_over {
            for entry in &self.entries {
                if exclusions.contains(&entry.name) {
                    self.on_hold.remove(&entry.name);
                } else {
                    to_keep.push((entry.name.clone(), entry.traits));
                }
            }
        }

        self.entries.clear();
        self.on_hold.clear();

        let joker = self.deck.joker_drawn();
        let low = self.deck.remaining() < self.reshuffle_threshold;
        let reshuffled = joker || low;
        if reshuffled {
            self.deck.reshuffle(&mut self.rng);
            info!(joker, low, round = self.round_number, "deck reshuffled at round boundary");
        }
        self.deck.reset_joker_flag();

        let mut redealt = Vec::with_capacity(to_keep.len());
        for (name, traits) in to_keep {
            redealt.push(self.deal_to(name, traits)?);
        }

        info!(
            round = self.round_number,
            carried = redealt.len(),
            "new round"
        );

        Ok(NewRoundReport {
            round_number: self.round_number,
            carried_over: carry_over,
            reshuffled,
            redealt,
            remaining: self.deck.remaining(),
        })
    }

    /// Убрать участников из раунда. Неизвестные имена только попадают в отчёт.
    pub fn drop_participants<S: AsRef<str>>(&mut self, tokens: &[S]) -> DropReport {
        let mut report = DropReport::default();

        for token in tokens {
            let (name, _) = parse_participant(token.as_ref());
            if self.remove_entry(&name) {
                self.on_hold.remove(&name);
                report.removed.push(name);
            } else {
                report.unknown.push(name);
            }
        }

        report
    }

    /// `-Имя` снимает с холда, `Имя` ставит на холд (если есть запись в раунде).
    pub fn hold<S: AsRef<str>>(&mut self, tokens: &[S]) -> HoldReport {
        let mut report = HoldReport::default();

        for token in tokens {
            let token = token.as_ref();
            if let Some(name) = token.strip_prefix('-') {
                if self.on_hold.remove(name) {
                    report.changes.push(HoldChange::Released(name.to_string()));
                }
            } else {
                let (name, _) = parse_participant(token);
                if self.entry(&name).is_some() {
                    self.on_hold.insert(name.clone());
                    report.changes.push(HoldChange::Held(name));
                }
            }
        }

        report
    }

    /// Разовый добор `count` карт из отдельной свежей колоды.
    /// Колода боя и записи раунда не меняются.
    pub fn draw_from_fresh_deck(&mut self, count: usize) -> Result<Vec<Card>, EngineError> {
        let mut deck = Deck::shuffled(&mut self.rng);
        (0..count).map(|_| deck.draw(&mut self.rng)).collect()
    }

    fn deal_to(&mut self, name: String, traits: Traits) -> Result<RoundEntry, EngineError> {
        let outcome = deal_cards(&mut self.deck, &mut self.rng, &traits)?;
        debug!(
            name = %name,
            active = %outcome.active,
            drawn = outcome.drawn.len(),
            "dealt"
        );

        let entry = RoundEntry::new(name, outcome.active, outcome.drawn, traits);
        self.entries.push(entry.clone());
        Ok(entry)
    }

    fn remove_entry(&mut self, name: &str) -> bool {
        match self.entries.iter().position(|e| e.name == name) {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }
}
