//! Portfolio records shown on the works page.
//!
//! Entries are listed in the order the company curates them; the works page
//! re-sorts by year, so insertion order only matters for ties.

use crate::types::{Project, ProjectStatus};
use std::sync::OnceLock;

struct Entry {
    id: u32,
    client: &'static str,
    year: i32,
    status: ProjectStatus,
    work_types: &'static [&'static str],
    description: &'static str,
}

const ENTRIES: &[Entry] = &[
    Entry {
        id: 1,
        client: "АО «Транстелеком»",
        year: 2021,
        status: ProjectStatus::Completed,
        work_types: &["Электромонтаж и связь", "Волоконно-оптические линии связи"],
        description: "Прокладка ВОЛС протяжённостью 38 км вдоль железнодорожной магистрали Караганда – Балхаш с монтажом узлов доступа.",
    },
    Entry {
        id: 2,
        client: "BI Group",
        year: 2022,
        status: ProjectStatus::Completed,
        work_types: &["Строительство и реконструкция", "Электромонтаж и связь"],
        description: "Внутренние и наружные сети электроснабжения жилого комплекса из четырёх секций, пусконаладка вводно-распределительных устройств.",
    },
    Entry {
        id: 3,
        client: "ТОО «Караганды Жарык»",
        year: 2023,
        status: ProjectStatus::Completed,
        work_types: &["Электромонтаж и связь", "Трансформаторные подстанции"],
        description: "Реконструкция ВЛ-10 кВ и замена трёх комплектных трансформаторных подстанций в пригородной зоне Караганды.",
    },
    Entry {
        id: 4,
        client: "ГУ «Отдел ЖКХ города Караганды»",
        year: 2023,
        status: ProjectStatus::Completed,
        work_types: &["Инновационные решения", "Светофорные объекты"],
        description: "Строительство и модернизация 12 светофорных объектов с адаптивным управлением и подключением к городскому центру мониторинга.",
    },
    Entry {
        id: 5,
        client: "АО «АрселорМиттал Темиртау»",
        year: 2021,
        status: ProjectStatus::Completed,
        work_types: &["Автоматизация и системы учёта", "АСКУЭ"],
        description: "Внедрение автоматизированной системы коммерческого учёта электроэнергии на двух цехах прокатного производства.",
    },
    Entry {
        id: 6,
        client: "ТОО «Kazakhmys Smelting»",
        year: 2020,
        status: ProjectStatus::Completed,
        work_types: &["Промышленное производство", "Шкафы управления"],
        description: "Изготовление и поставка 46 шкафов управления и блок-боксов для насосных станций оборотного водоснабжения.",
    },
    Entry {
        id: 7,
        client: "КГУ «Школа-гимназия №97»",
        year: 2022,
        status: ProjectStatus::Completed,
        work_types: &["Строительство и реконструкция", "Капитальный ремонт"],
        description: "Капитальный ремонт учебного корпуса: кровля, фасад, внутренние инженерные сети и система видеонаблюдения.",
    },
    Entry {
        id: 8,
        client: "АО «KEGOC»",
        year: 2024,
        status: ProjectStatus::InProgress,
        work_types: &["Электромонтаж и связь", "Кабельные линии"],
        description: "Строительство кабельной линии 110 кВ для подключения новой подстанции промышленной зоны «Восток».",
    },
    Entry {
        id: 9,
        client: "Акимат Карагандинской области",
        year: 2024,
        status: ProjectStatus::InProgress,
        work_types: &["Инновационные решения", "Умное освещение", "IoT"],
        description: "Система «умное освещение» для трёх микрорайонов с удалённым управлением и учётом потребления каждой опоры.",
    },
    Entry {
        id: 10,
        client: "ТОО «Multiplit Trade»",
        year: 2019,
        status: ProjectStatus::Completed,
        work_types: &["Продажи и лицензии", "Стеновые панели"],
        description: "Оптовые поставки стеновых панелей Мультиплит для строительства складского комплекса площадью 6 000 м².",
    },
    Entry {
        id: 11,
        client: "АО «Транстелеком»",
        year: 2025,
        status: ProjectStatus::Planned,
        work_types: &["Автоматизация и системы учёта", "Мониторинг безопасности"],
        description: "Система мониторинга безопасности и контроля доступа для региональных узлов связи.",
    },
    Entry {
        id: 12,
        client: "BI Group",
        year: 2025,
        status: ProjectStatus::InProgress,
        work_types: &["Строительство и реконструкция"],
        description: "Общестроительные работы и монтаж металлоконструкций паркинга жилого квартала.",
    },
    Entry {
        id: 13,
        client: "ТОО «Шахтинская ТЭЦ»",
        year: 2020,
        status: ProjectStatus::Completed,
        work_types: &["Автоматизация и системы учёта", "АСУ ТП"],
        description: "Разработка и внедрение АСУ ТП котельного оборудования с выводом данных на диспетчерский пункт.",
    },
    Entry {
        id: 14,
        client: "ГУ «Управление строительства Карагандинской области»",
        year: 2025,
        status: ProjectStatus::Planned,
        work_types: &["Строительство и реконструкция", "Проектные работы"],
        description: "Проектирование и реконструкция административного здания с заменой инженерных систем.",
    },
];

static CATALOG: OnceLock<Vec<Project>> = OnceLock::new();

/// The full portfolio in curated order. Built on first use, never mutated.
pub fn projects() -> &'static [Project] {
    CATALOG.get_or_init(|| ENTRIES.iter().map(Entry::to_project).collect())
}

/// Look a record up by id.
pub fn project(id: u32) -> Option<&'static Project> {
    projects().iter().find(|p| p.id == id)
}

impl Entry {
    fn to_project(&self) -> Project {
        Project {
            id: self.id,
            client: self.client.to_string(),
            year: self.year,
            status: self.status,
            work_types: self.work_types.iter().map(|s| s.to_string()).collect(),
            description: self.description.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<u32> = projects().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), projects().len());
    }

    #[test]
    fn every_project_has_work_types() {
        for p in projects() {
            assert!(!p.work_types.is_empty(), "project {} has no work types", p.id);
        }
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(project(2).map(|p| p.client.as_str()), Some("BI Group"));
        assert!(project(999).is_none());
    }

    #[test]
    fn catalog_is_built_once() {
        assert!(std::ptr::eq(projects(), projects()));
    }
}
