use crate::utils::color::Accent;
use crate::utils::file_size::FileSizeUtils;

const GIB: u64 = 1024 * 1024 * 1024;

pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
    pub trend: &'static str,
    pub accent: Accent,
}

pub struct RecentFile {
    pub name: &'static str,
    pub sector: &'static str,
    pub synced: &'static str,
    pub volume: &'static str,
    pub accent: Accent,
}

pub const STAT_CARDS: [StatCard; 3] = [
    StatCard {
        label: "Encrypted Files",
        value: "12.4k",
        trend: "+12%",
        accent: Accent::Blue,
    },
    StatCard {
        label: "Active Shares",
        value: "84",
        trend: "+5",
        accent: Accent::Indigo,
    },
    StatCard {
        label: "Traffic Load",
        value: "Low",
        trend: "Stable",
        accent: Accent::Amber,
    },
];

pub const RECENT_FILES: [RecentFile; 4] = [
    RecentFile {
        name: "Global_Strategy_2025.pdf",
        sector: "DOCX",
        synced: "02:14 PM",
        volume: "4.2 MB",
        accent: Accent::Red,
    },
    RecentFile {
        name: "System_Blueprint_Final.dwg",
        sector: "ARCHIVE",
        synced: "Yesterday",
        volume: "124 MB",
        accent: Accent::Blue,
    },
    RecentFile {
        name: "Atmosphere_Video.mp4",
        sector: "MEDIA",
        synced: "Oct 28",
        volume: "2.1 GB",
        accent: Accent::Purple,
    },
    RecentFile {
        name: "Identity_Module_V3.png",
        sector: "ASSET",
        synced: "Oct 24",
        volume: "1.8 MB",
        accent: Accent::Emerald,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Capacity {
    pub used: u64,
    pub total: u64,
}

impl Default for Capacity {
    fn default() -> Self {
        Self {
            // 14.8 GB
            used: 148 * GIB / 10,
            total: 20 * GIB,
        }
    }
}

impl Capacity {
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            (self.used as f64 / self.total as f64) as f32
        }
    }

    pub fn percent(&self) -> u32 {
        (self.fraction() * 100.0).round() as u32
    }

    pub fn summary(&self) -> String {
        format!(
            "{} of {} used",
            FileSizeUtils::format_size(self.used),
            FileSizeUtils::format_size(self.total)
        )
    }
}

// case-insensitive substring match; blank query keeps everything
pub fn filter_recent<'a>(files: &'a [RecentFile], query: &str) -> Vec<&'a RecentFile> {
    let query = query.trim().to_lowercase();
    files
        .iter()
        .filter(|file| query.is_empty() || file.name.to_lowercase().contains(&query))
        .collect()
}
