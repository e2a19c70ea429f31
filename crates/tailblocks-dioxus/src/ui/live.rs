use dioxus::prelude::*;
use tailblocks_engine::{
    DisclosureFooter, DisclosureFooterConfig, DropdownNav, DropdownNavConfig, MegaMenuNav,
    MegaMenuNavConfig, NewsletterFooter, NewsletterFooterConfig, SearchNav, SearchNavConfig,
};

/// Engine block state that a component keeps alive across re-renders.
pub trait LiveBlock: Sized + 'static {
    type Config: Clone + PartialEq + 'static;

    fn create(config: Self::Config) -> Self;
    fn reconfigure(&mut self, config: Self::Config);
}

/// Hold a block's interaction state in a signal.
///
/// When the parent re-renders with different content the state is
/// reconfigured in place rather than rebuilt, so open menus and typed text
/// survive. The incoming config is compared with the last one applied, not
/// with the block's own copy, which may be normalised.
///
/// Both values are peeked before the write, so the reconfigure does not
/// schedule another render of the calling component.
pub fn use_live_block<B: LiveBlock>(config: B::Config) -> Signal<B> {
    let mut applied = use_hook(|| CopyValue::new(config.clone()));
    let mut state = use_signal(|| B::create(config.clone()));
    if *applied.peek() != config {
        log::debug!("Block content changed, carrying interaction state over");
        applied.set(config.clone());
        state.write().reconfigure(config);
    }
    state
}

macro_rules! live_block {
    ($($block:ty => $config:ty),* $(,)?) => {
        $(
            impl LiveBlock for $block {
                type Config = $config;

                fn create(config: $config) -> Self {
                    <$block>::new(config)
                }

                fn reconfigure(&mut self, config: $config) {
                    <$block>::reconfigure(self, config)
                }
            }
        )*
    };
}

live_block! {
    MegaMenuNav => MegaMenuNavConfig,
    DropdownNav => DropdownNavConfig,
    SearchNav => SearchNavConfig,
    DisclosureFooter => DisclosureFooterConfig,
    NewsletterFooter => NewsletterFooterConfig,
}
