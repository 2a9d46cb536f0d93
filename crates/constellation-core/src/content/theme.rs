use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeName {
    Gold,
    Bw,
    Red,
}

/// Class strings applied by the rich-text renderer for one color theme.
#[derive(Debug)]
pub struct Theme {
    pub name: ThemeName,
    pub accent: &'static str,
    pub heading: &'static str,
    pub paragraph: &'static str,
    pub link: &'static str,
    pub quote: &'static str,
    pub list: &'static str,
    pub inline_code: &'static str,
    pub code_block: &'static str,
    pub figure: &'static str,
    pub callout: &'static str,
    pub cta: &'static str,
    pub button: &'static str,
    pub table: &'static str,
    pub tag: &'static str,
}

static GOLD: Theme = Theme {
    name: ThemeName::Gold,
    accent: "#c5a059",
    heading: "font-serif text-[#1a1a1a] tracking-tight",
    paragraph: "text-[#1a1a1a]/80 leading-relaxed mb-6",
    link: "text-[#c5a059] underline underline-offset-4 hover:text-[#1a1a1a]",
    quote: "border-l-4 border-[#c5a059] pl-6 italic text-[#1a1a1a]/70 my-8",
    list: "marker:text-[#c5a059] pl-6 mb-6 space-y-2",
    inline_code: "font-mono text-sm bg-[#c5a059]/10 px-1 py-0.5",
    code_block: "bg-[#1a1a1a] text-[#f5f0e6] font-mono text-sm my-8",
    figure: "my-10 border border-[#c5a059]/30",
    callout: "bg-[#c5a059]/10 border-l-4 border-[#c5a059] p-6 my-8",
    cta: "bg-[#1a1a1a] text-[#f5f0e6] p-8 my-10",
    button: "inline-block bg-[#c5a059] text-[#1a1a1a] px-6 py-3 font-mono uppercase",
    table: "w-full border-collapse border border-[#c5a059]/40 text-sm",
    tag: "border border-[#c5a059] text-[#c5a059] font-mono text-xs px-2 py-1",
};

static BW: Theme = Theme {
    name: ThemeName::Bw,
    accent: "#000000",
    heading: "font-mono uppercase text-black tracking-tight",
    paragraph: "text-black leading-relaxed mb-6",
    link: "text-black underline decoration-2 hover:bg-black hover:text-white",
    quote: "border-l-8 border-black pl-6 font-mono text-black my-8",
    list: "marker:text-black pl-6 mb-6 space-y-2",
    inline_code: "font-mono text-sm bg-black text-white px-1 py-0.5",
    code_block: "bg-black text-white font-mono text-sm my-8 border-2 border-black",
    figure: "my-10 border-2 border-black grayscale",
    callout: "bg-white border-2 border-black p-6 my-8",
    cta: "bg-black text-white p-8 my-10",
    button: "inline-block bg-white text-black px-6 py-3 font-mono uppercase border-2 border-white",
    table: "w-full border-collapse border-2 border-black text-sm",
    tag: "border-2 border-black text-black font-mono text-xs px-2 py-1",
};

static RED: Theme = Theme {
    name: ThemeName::Red,
    accent: "#d92b2b",
    heading: "font-serif text-[#1a1a1a] tracking-tight",
    paragraph: "text-[#1a1a1a]/80 leading-relaxed mb-6",
    link: "text-[#d92b2b] underline underline-offset-4 hover:text-[#1a1a1a]",
    quote: "border-l-4 border-[#d92b2b] pl-6 italic text-[#1a1a1a]/70 my-8",
    list: "marker:text-[#d92b2b] pl-6 mb-6 space-y-2",
    inline_code: "font-mono text-sm bg-[#d92b2b]/10 px-1 py-0.5",
    code_block: "bg-[#1a1a1a] text-white font-mono text-sm my-8",
    figure: "my-10 border border-[#d92b2b]/30",
    callout: "bg-[#d92b2b]/5 border-l-4 border-[#d92b2b] p-6 my-8",
    cta: "bg-[#d92b2b] text-white p-8 my-10",
    button: "inline-block bg-white text-[#d92b2b] px-6 py-3 font-mono uppercase",
    table: "w-full border-collapse border border-[#d92b2b]/40 text-sm",
    tag: "border border-[#d92b2b] text-[#d92b2b] font-mono text-xs px-2 py-1",
};

impl ThemeName {
    pub fn theme(self) -> &'static Theme {
        match self {
            ThemeName::Gold => &GOLD,
            ThemeName::Bw => &BW,
            ThemeName::Red => &RED,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Gold => "gold",
            ThemeName::Bw => "bw",
            ThemeName::Red => "red",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the post theme from its service pillar. AI, content and training
/// posts are gold, dashboard posts black-and-white, everything else red.
///
/// "ai" only counts as a whole word, so "Retail Dashboards" or "Email" do
/// not turn gold.
pub fn select_theme(service_pillar: Option<&str>) -> ThemeName {
    let Some(pillar) = service_pillar else {
        return ThemeName::Red;
    };
    let pillar = pillar.to_lowercase();
    let has_ai_word = pillar
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| word == "ai");
    if has_ai_word || pillar.contains("content") || pillar.contains("training") {
        ThemeName::Gold
    } else if pillar.contains("dashboard") {
        ThemeName::Bw
    } else {
        ThemeName::Red
    }
}
